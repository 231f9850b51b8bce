//! Placeholder registration table
//!
//! Handlers are registered explicitly through [`HandlerDescriptor`]s and
//! looked up by name during evaluation. The registry is built once and never
//! mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::interpolation::error::HandlerError;
use crate::interpolation::render_result::RenderResult;

/// Value produced by a handler, stringified into the output
pub type HandlerResult = Result<Value, HandlerError>;

/// Zero-argument handler: `{name}`
pub type VariableHandler<C> =
    Arc<dyn for<'a> Fn(&'a C) -> BoxFuture<'a, HandlerResult> + Send + Sync>;

/// Handler taking evaluated arguments: `{name:a;b}`
///
/// Receives the in-progress [`RenderResult`] so it can record extras and tags.
pub type FunctionHandler<C> = Arc<
    dyn for<'a> Fn(&'a C, &'a mut RenderResult, Vec<String>) -> BoxFuture<'a, HandlerResult>
        + Send
        + Sync,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Variable,
    Function,
}

enum Handler<C> {
    Variable(VariableHandler<C>),
    Function(FunctionHandler<C>),
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        match self {
            Handler::Variable(handler) => Handler::Variable(Arc::clone(handler)),
            Handler::Function(handler) => Handler::Function(Arc::clone(handler)),
        }
    }
}

/// A named handler ready to be registered
pub struct HandlerDescriptor<C> {
    name: String,
    handler: Handler<C>,
}

impl<C> Clone for HandlerDescriptor<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<C> fmt::Debug for HandlerDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<C> HandlerDescriptor<C> {
    /// Register an async variable handler
    pub fn variable<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, HandlerResult> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            handler: Handler::Variable(Arc::new(handler)),
        }
    }

    /// Register an async function handler
    pub fn function<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: for<'a> Fn(&'a C, &'a mut RenderResult, Vec<String>) -> BoxFuture<'a, HandlerResult>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            handler: Handler::Function(Arc::new(handler)),
        }
    }

    /// Register a variable handler that completes immediately
    pub fn sync_variable<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&C) -> HandlerResult + Send + Sync + 'static,
    {
        Self::variable(name, move |ctx| future::ready(handler(ctx)).boxed())
    }

    /// Register a function handler that completes immediately
    pub fn sync_function<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&C, &mut RenderResult, Vec<String>) -> HandlerResult + Send + Sync + 'static,
    {
        Self::function(name, move |ctx, result, args| {
            future::ready(handler(ctx, result, args)).boxed()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlaceholderKind {
        match self.handler {
            Handler::Variable(_) => PlaceholderKind::Variable,
            Handler::Function(_) => PlaceholderKind::Function,
        }
    }
}

/// Registered placeholder names, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceholderListing {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
}

/// Name to handler lookup, one namespace per kind
pub struct Registry<C> {
    variables: BTreeMap<String, VariableHandler<C>>,
    functions: BTreeMap<String, FunctionHandler<C>>,
}

impl<C> Registry<C> {
    /// Build the registry; a repeated name keeps the last descriptor
    pub fn new(descriptors: impl IntoIterator<Item = HandlerDescriptor<C>>) -> Self {
        let mut variables = BTreeMap::new();
        let mut functions = BTreeMap::new();

        for descriptor in descriptors {
            let HandlerDescriptor { name, handler } = descriptor;
            let replaced = match handler {
                Handler::Variable(handler) => variables.insert(name.clone(), handler).is_some(),
                Handler::Function(handler) => functions.insert(name.clone(), handler).is_some(),
            };
            if replaced {
                debug!(placeholder = %name, "duplicate placeholder registration, keeping the last");
            }
        }

        Self {
            variables,
            functions,
        }
    }

    pub fn variable(&self, name: &str) -> Option<&VariableHandler<C>> {
        self.variables.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionHandler<C>> {
        self.functions.get(name)
    }

    pub fn listing(&self) -> PlaceholderListing {
        PlaceholderListing {
            variables: self.variables.keys().cloned().collect(),
            functions: self.functions.keys().cloned().collect(),
        }
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("variables", &self.variables.keys().collect::<Vec<_>>())
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
