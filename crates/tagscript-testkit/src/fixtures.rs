//! Fixture context and handlers for engine tests
//!
//! The handler set exercises every evaluation path: variables, functions,
//! a name registered as both kinds, side-artifact recorders, failing,
//! panicking and suspending handlers.

use std::time::Duration;

use futures_util::FutureExt;
use serde_json::{Value, json};
use tagscript_core::interpolation::{
    HandlerDescriptor, HandlerError, HandlerResult, InterpolationEngine, RenderResult,
};

/// Render context used by the fixture handlers
#[derive(Debug, Clone)]
pub struct FixtureContext {
    pub user_name: String,
}

impl FixtureContext {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}

impl Default for FixtureContext {
    fn default() -> Self {
        Self::new("Ann")
    }
}

/// Fixture handlers
///
/// | Name | Kind | Behavior |
/// |---|---|---|
/// | `user.name` | variable | context user name |
/// | `greet` | variable | `Hello <user>` |
/// | `greet` | function | `Hello <args joined by " and ">` |
/// | `sum` | function | strict integer sum, non-integers fail |
/// | `concat` | function | arguments joined |
/// | `args` | function | arguments as a JSON array |
/// | `wrap` | function | arguments joined inside `[...]` |
/// | `record` | function | pushes `{"label": arg}` and tags `arg` |
/// | `fail` | function | always fails |
/// | `explode` | variable and function | panics |
/// | `later` | function | sleeps, then pushes `{"label": arg}` and renders `arg` |
pub fn fixture_handlers() -> Vec<HandlerDescriptor<FixtureContext>> {
    vec![
        HandlerDescriptor::sync_variable("user.name", |ctx: &FixtureContext| {
            Ok(json!(ctx.user_name))
        }),
        HandlerDescriptor::sync_variable("greet", |ctx: &FixtureContext| {
            Ok(json!(format!("Hello {}", ctx.user_name)))
        }),
        HandlerDescriptor::sync_function("greet", |_, _, args| {
            Ok(json!(format!("Hello {}", args.join(" and "))))
        }),
        HandlerDescriptor::sync_function("sum", |_, _, args| sum(&args)),
        HandlerDescriptor::sync_function("concat", |_, _, args| Ok(json!(args.concat()))),
        HandlerDescriptor::sync_function("args", |_, _, args| Ok(json!(args))),
        HandlerDescriptor::sync_function("wrap", |_, _, args| {
            Ok(json!(format!("[{}]", args.concat())))
        }),
        HandlerDescriptor::sync_function("record", |_, result, args| record(result, &args)),
        HandlerDescriptor::sync_function("fail", |_, _, _| {
            Err(HandlerError::failed("fixture failure"))
        }),
        HandlerDescriptor::sync_variable("explode", |_| explode()),
        HandlerDescriptor::sync_function("explode", |_, _, _| explode()),
        HandlerDescriptor::function("later", |_, result, args| {
            async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                let label = args.first().cloned().unwrap_or_default();
                result.push_extra(json!({ "label": label }));
                Ok(json!(label))
            }
            .boxed()
        }),
    ]
}

/// Engine over the fixture handlers with the default configuration
pub fn fixture_engine() -> InterpolationEngine<FixtureContext> {
    InterpolationEngine::new(fixture_handlers())
}

fn sum(args: &[String]) -> HandlerResult {
    let mut total: i64 = 0;
    for (index, arg) in args.iter().enumerate() {
        let value: i64 = arg
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| HandlerError::InvalidArgument {
                index,
                reason: e.to_string(),
            })?;
        total += value;
    }
    Ok(json!(total))
}

fn record(result: &mut RenderResult, args: &[String]) -> HandlerResult {
    let label = args.first().cloned().unwrap_or_default();
    result.push_extra(json!({ "label": label }));
    result.add_tag(label);
    Ok(Value::Null)
}

fn explode() -> HandlerResult {
    panic!("fixture handler panicked")
}
