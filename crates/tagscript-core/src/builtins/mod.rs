//! Builtin placeholders
//!
//! Platform-independent handlers that work with any render context:
//!
//! - text: `upper`, `lower`, `title`, `length`, `repeat`
//! - math: `sum`, `sub`, `mul`, `div`
//! - rich-content blocks: `embed.title`, `embed.description`, `embed.color`,
//!   `embed.footer`, `embed.image`, `embed.thumbnail`, `embed.field`
//! - utility: `emoji`, `if`

mod args;
pub mod embed;
pub mod math;
pub mod text;
pub mod utility;

use crate::interpolation::HandlerDescriptor;

/// Every builtin handler, ready to pass to an engine
///
/// Callers can append their own descriptors; a later descriptor with the
/// same name replaces the builtin.
pub fn handlers<C: 'static>() -> Vec<HandlerDescriptor<C>> {
    let mut handlers = text::handlers();
    handlers.extend(math::handlers());
    handlers.extend(embed::handlers());
    handlers.extend(utility::handlers());
    handlers
}
