//! Shared test helpers for engine tests

use crate::interpolation::{HandlerDescriptor, HandlerError, InterpolationEngine, RenderResult};
use futures_util::FutureExt;
use serde_json::{json, Value};

pub(super) struct TestCtx {
    pub name: String,
}

pub(super) fn ctx() -> TestCtx {
    TestCtx {
        name: "Ann".to_string(),
    }
}

/// Handler set covering every evaluation path
pub(super) fn handlers() -> Vec<HandlerDescriptor<TestCtx>> {
    vec![
        HandlerDescriptor::sync_variable("user.name", |ctx: &TestCtx| Ok(json!(ctx.name))),
        HandlerDescriptor::sync_variable("nothing", |_: &TestCtx| Ok(Value::Null)),
        HandlerDescriptor::sync_variable("answer", |_: &TestCtx| Ok(json!(42))),
        HandlerDescriptor::sync_function("sum", |_: &TestCtx, _: &mut RenderResult, args| {
            let mut total = 0i64;
            for (index, arg) in args.iter().enumerate() {
                total += arg.trim().parse::<i64>().map_err(|e| {
                    HandlerError::InvalidArgument {
                        index,
                        reason: e.to_string(),
                    }
                })?;
            }
            Ok(json!(total))
        }),
        HandlerDescriptor::sync_function("concat", |_: &TestCtx, _: &mut RenderResult, args| {
            Ok(json!(args.concat()))
        }),
        HandlerDescriptor::sync_function("args", |_: &TestCtx, _: &mut RenderResult, args| {
            Ok(json!(args))
        }),
        HandlerDescriptor::sync_function("wrap", |_: &TestCtx, _: &mut RenderResult, args| {
            Ok(json!(format!("[{}]", args.concat())))
        }),
        HandlerDescriptor::sync_variable("greet", |ctx: &TestCtx| {
            Ok(json!(format!("Hello {}", ctx.name)))
        }),
        HandlerDescriptor::sync_function("greet", |_: &TestCtx, _: &mut RenderResult, args| {
            Ok(json!(format!("Hello {}", args.join(" and "))))
        }),
        HandlerDescriptor::sync_function(
            "record",
            |_: &TestCtx, result: &mut RenderResult, args| {
                let label = args.first().cloned().unwrap_or_default();
                result.push_extra(json!({ "label": label }));
                result.add_tag(label);
                Ok(Value::Null)
            },
        ),
        HandlerDescriptor::sync_function("fail", |_: &TestCtx, _: &mut RenderResult, _| {
            Err(HandlerError::failed("always fails"))
        }),
        HandlerDescriptor::sync_variable("explode", |_: &TestCtx| -> crate::interpolation::HandlerResult {
            panic!("handler blew up")
        }),
        HandlerDescriptor::function("later", |_, result, args| {
            async move {
                tokio::task::yield_now().await;
                let label = args.first().cloned().unwrap_or_default();
                result.push_extra(json!({ "label": label }));
                Ok(json!(label))
            }
            .boxed()
        }),
    ]
}

pub(super) fn engine() -> InterpolationEngine<TestCtx> {
    InterpolationEngine::new(handlers())
}

pub(super) async fn render(template: &str) -> RenderResult {
    engine().render(template, &ctx()).await
}
