//! Interpolation engine façade

mod interpreter;
pub mod lexer;
pub mod registry;
mod scan;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::interpolation::render_result::RenderResult;

use interpreter::Interpreter;
use registry::{HandlerDescriptor, PlaceholderListing, Registry};

/// Renders templates against a fixed set of placeholder handlers
///
/// The engine holds no per-render state. Clones share the same registry, so
/// one engine can serve many concurrent renders.
///
/// # Example
///
/// ```
/// use tagscript_core::interpolation::{HandlerDescriptor, InterpolationEngine};
/// use serde_json::json;
///
/// struct Ctx {
///     name: String,
/// }
///
/// let engine = InterpolationEngine::new(vec![
///     HandlerDescriptor::sync_variable("user.name", |ctx: &Ctx| Ok(json!(ctx.name))),
/// ]);
///
/// let ctx = Ctx { name: "Ada".to_string() };
/// let result = futures_util::FutureExt::now_or_never(engine.render("Hi {user.name}", &ctx));
/// assert_eq!(result.unwrap().content(), "Hi Ada");
/// ```
pub struct InterpolationEngine<C> {
    registry: Arc<Registry<C>>,
    config: EngineConfig,
}

impl<C> Clone for InterpolationEngine<C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config,
        }
    }
}

impl<C> std::fmt::Debug for InterpolationEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpolationEngine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}

impl<C: Sync> InterpolationEngine<C> {
    /// Build an engine with the default configuration
    pub fn new(descriptors: impl IntoIterator<Item = HandlerDescriptor<C>>) -> Self {
        Self::with_config(descriptors, EngineConfig::default())
    }

    pub fn with_config(
        descriptors: impl IntoIterator<Item = HandlerDescriptor<C>>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry: Arc::new(Registry::new(descriptors)),
            config,
        }
    }

    /// Render a template
    ///
    /// Never fails: malformed input, unknown placeholders and failing
    /// handlers all degrade to literal or empty text.
    pub async fn render(&self, template: &str, context: &C) -> RenderResult {
        if template.is_empty() {
            return RenderResult::new();
        }

        let nodes = lexer::parse(template);
        Interpreter::new(&self.registry, context, self.config.effective_max_depth())
            .render(&nodes)
            .await
    }

    /// Names of all registered placeholders, sorted per kind
    pub fn introspect(&self) -> PlaceholderListing {
        self.registry.listing()
    }

    pub fn registry(&self) -> &Registry<C> {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
