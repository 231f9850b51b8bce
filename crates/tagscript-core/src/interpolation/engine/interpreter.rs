//! Recursive node evaluation
//!
//! One interpreter exists per render call and owns that call's
//! [`RenderResult`]. Nodes are evaluated strictly in source order.

use std::panic::AssertUnwindSafe;

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::Value;
use tracing::{debug, trace};

use super::registry::{HandlerResult, Registry};
use crate::interpolation::error::HandlerError;
use crate::interpolation::nodes::{Node, PlaceholderNode};
use crate::interpolation::render_result::RenderResult;

/// What evaluating a node produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Rendered(String),
    /// Emit the node's raw source instead
    Fallback,
}

impl Outcome {
    fn resolve<'a>(&'a self, node: &'a Node) -> &'a str {
        match self {
            Outcome::Rendered(text) => text.as_str(),
            Outcome::Fallback => node.raw(),
        }
    }
}

pub(crate) struct Interpreter<'r, C> {
    registry: &'r Registry<C>,
    context: &'r C,
    max_depth: usize,
    result: RenderResult,
}

impl<'r, C: Sync> Interpreter<'r, C> {
    pub fn new(registry: &'r Registry<C>, context: &'r C, max_depth: usize) -> Self {
        Self {
            registry,
            context,
            max_depth,
            result: RenderResult::new(),
        }
    }

    /// Evaluate top-level nodes into the final result
    ///
    /// A panic while evaluating one node emits that node's raw text and
    /// rendering continues with the next node.
    pub async fn render(mut self, nodes: &[Node]) -> RenderResult {
        for node in nodes {
            let outcome = AssertUnwindSafe(self.eval(node, 0)).catch_unwind().await;
            match outcome {
                Ok(outcome) => self.result.push_content(outcome.resolve(node)),
                Err(_) => {
                    debug!(node = node.raw(), "node evaluation panicked, emitting raw text");
                    self.result.push_content(node.raw());
                }
            }
        }
        self.result
    }

    fn eval<'a>(&'a mut self, node: &'a Node, depth: usize) -> BoxFuture<'a, Outcome> {
        async move {
            if depth > self.max_depth {
                trace!(node = node.raw(), depth, "nesting too deep, emitting raw text");
                return Outcome::Fallback;
            }

            match node {
                Node::Text(text) => Outcome::Rendered(text.value().to_string()),
                Node::Placeholder(placeholder) => self.eval_placeholder(placeholder, depth).await,
            }
        }
        .boxed()
    }

    async fn eval_placeholder(&mut self, node: &PlaceholderNode, depth: usize) -> Outcome {
        let registry = self.registry;
        let context = self.context;
        let name = node.name();

        if node.args().is_empty() {
            if let Some(handler) = registry.variable(name) {
                let outcome = AssertUnwindSafe(async { handler(context).await })
                    .catch_unwind()
                    .await;
                return Outcome::Rendered(settle(name, outcome));
            }
        }

        let Some(handler) = registry.function(name) else {
            trace!(placeholder = name, "unknown placeholder, emitting raw text");
            return Outcome::Fallback;
        };

        let mut args = Vec::with_capacity(node.args().len());
        for group in node.args() {
            let mut arg = String::new();
            for child in group {
                let outcome = self.eval(child, depth + 1).await;
                arg.push_str(outcome.resolve(child));
            }
            args.push(arg);
        }

        let result = &mut self.result;
        let outcome = AssertUnwindSafe(async { handler(context, result, args).await })
            .catch_unwind()
            .await;
        Outcome::Rendered(settle(name, outcome))
    }
}

/// Turn a handler's result into output text; failures render as nothing
fn settle(name: &str, outcome: std::thread::Result<HandlerResult>) -> String {
    let error = match outcome {
        Ok(Ok(value)) => return stringify(value),
        Ok(Err(error)) => error,
        Err(_) => HandlerError::Panicked,
    };
    debug!(placeholder = name, error = %error, "placeholder handler failed");
    String::new()
}

/// Convert a handler value to output text
///
/// `null` renders as nothing, strings verbatim, everything else as compact
/// JSON.
pub(crate) fn stringify(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}
