//! Integration tests for InterpolationEngine against the fixture handlers

use serde_json::json;
use tagscript_core::interpolation::{parse, Node};
use tagscript_core::{InterpolationEngine, PlaceholderListing};
use tagscript_testkit::{fixture_engine, fixture_handlers, FixtureContext};
use tokio::task::JoinSet;

async fn render(template: &str) -> tagscript_core::RenderResult {
    fixture_engine()
        .render(template, &FixtureContext::default())
        .await
}

#[tokio::test]
async fn test_variable_and_function() {
    let result = render("Hello {user.name}, sum is {sum:1;2}").await;
    assert_eq!(result.content(), "Hello Ann, sum is 3");
}

#[tokio::test]
async fn test_escaped_and_unclosed_are_literal() {
    assert_eq!(render(r"\{literal\}").await.content(), "{literal}");
    assert_eq!(render("{user.name").await.content(), "{user.name");
    assert_eq!(render("{}").await.content(), "{}");
}

#[tokio::test]
async fn test_argument_boundaries_survive_nesting() {
    let result = render(r"{args:{concat:x\;y};{user.name}}").await;
    assert_eq!(result.content(), r#"["x;y","Ann"]"#);
}

#[tokio::test]
async fn test_unknown_placeholder_round_trips() {
    let template = "Before {no.such.thing:1;{user.name}} after";
    assert_eq!(render(template).await.content(), template);
}

#[tokio::test]
async fn test_failures_render_empty_and_continue() {
    let result = render("[{fail:x}][{explode}][{explode:y}][{sum:1;nope}] {user.name}").await;
    assert_eq!(result.content(), "[][][][] Ann");
}

#[tokio::test]
async fn test_side_artifacts_in_source_order() {
    let result = render("{later:a}{record:b}{later:c}{record:b}").await;
    assert_eq!(result.content(), "ac");
    assert_eq!(
        result.extras(),
        &[
            json!({"label": "a"}),
            json!({"label": "b"}),
            json!({"label": "c"}),
            json!({"label": "b"}),
        ]
    );
    assert_eq!(result.tags().iter().collect::<Vec<_>>(), ["b"]);
}

#[tokio::test]
async fn test_depth_guard() {
    let levels = 20;
    let template = format!("{}x{}", "{wrap:".repeat(levels), "}".repeat(levels));
    let result = render(&template).await;

    let raw = format!("{}x{}", "{wrap:".repeat(4), "}".repeat(4));
    assert_eq!(
        result.content(),
        format!("{}{}{}", "[".repeat(16), raw, "]".repeat(16))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_renders_share_engine() {
    let engine = fixture_engine();
    let mut set = JoinSet::new();

    for i in 0..16 {
        let engine = engine.clone();
        set.spawn(async move {
            let ctx = FixtureContext::new(format!("user{}", i));
            let result = engine
                .render("{later:x}{user.name}{record:done}", &ctx)
                .await;
            (i, result)
        });
    }

    while let Some(joined) = set.join_next().await {
        let (i, result) = joined.unwrap();
        assert_eq!(result.content(), format!("xuser{}", i));
        assert_eq!(result.extras().len(), 2);
        assert_eq!(result.tags().iter().collect::<Vec<_>>(), ["done"]);
    }
}

#[test]
fn test_introspect() {
    let listing = fixture_engine().introspect();
    assert_eq!(
        listing,
        PlaceholderListing {
            variables: vec!["explode".into(), "greet".into(), "user.name".into()],
            functions: vec![
                "args".into(),
                "concat".into(),
                "explode".into(),
                "fail".into(),
                "greet".into(),
                "later".into(),
                "record".into(),
                "sum".into(),
                "wrap".into(),
            ],
        }
    );
}

#[tokio::test]
async fn test_builtins_combined_with_custom_handlers() {
    let mut handlers = tagscript_core::builtins::handlers::<FixtureContext>();
    handlers.extend(fixture_handlers());
    let engine = InterpolationEngine::new(handlers);

    let result = engine
        .render("{upper:{user.name}} {sum:2;3}", &FixtureContext::default())
        .await;

    // Fixture `sum` is registered last and replaces the builtin
    assert_eq!(result.content(), "ANN 5");
    assert_eq!(
        engine.render("{sum:2;x}", &FixtureContext::default()).await.content(),
        ""
    );
}

#[test]
fn test_parse_is_public() {
    let nodes = parse("{a:b}c");
    assert!(matches!(nodes[0], Node::Placeholder(_)));
    assert_eq!(nodes[1], Node::text("c"));
}

#[tokio::test]
async fn test_documented_properties() {
    assert_eq!(render("hello world").await.content(), "hello world");
    assert_eq!(render("a{b").await.content(), "a{b");
    assert_eq!(render("x{}y").await.content(), "x{}y");
    assert_eq!(render("Hi {user.name}!").await.content(), "Hi Ann!");
    assert_eq!(render("{sum:1;{sum:2;3}}").await.content(), "6");
    assert_eq!(render("{args:{sum:1;2};x}").await.content(), r#"["3","x"]"#);
    assert_eq!(render("{greet}").await.content(), "Hello Ann");
    assert_eq!(render("{greet:x}").await.content(), "Hello x");

    let empty: InterpolationEngine<()> = InterpolationEngine::new(Vec::new());
    let result = empty.render("{not.a.thing}", &()).await;
    assert_eq!(result.content(), "{not.a.thing}");
}
