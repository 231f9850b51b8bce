//! Interpolation module - placeholder templates rendered against handlers
//!
//! Turns user-authored strings (tag bodies, welcome messages, custom
//! responses) into output text plus side-artifacts collected by the
//! handlers that ran.
//!
//! ## Syntax
//!
//! - Variables: `{user.name}`
//! - Functions: `{sum:1;2;3}`, arguments separated by `;`
//! - Nesting: `{upper:{user.name}}`, a `;` inside a nested placeholder does
//!   not split the outer argument list
//! - Escape sequences: `\{`, `\}`, `\\`, `\;`, `\:`
//!
//! ## Failure model
//!
//! Rendering never fails. Unclosed or empty braces stay literal, unknown
//! placeholders pass through verbatim, failing handlers render as nothing
//! and placeholders nested deeper than the configured bound render as their
//! raw source text.

pub mod engine;
pub mod error;
pub mod nodes;
pub mod render_result;

pub use engine::registry::{
    FunctionHandler, HandlerDescriptor, HandlerResult, PlaceholderKind, PlaceholderListing,
    Registry, VariableHandler,
};
pub use engine::{lexer::parse, InterpolationEngine};
pub use error::HandlerError;
pub use nodes::{ArgumentGroup, Node, PlaceholderNode, TextNode};
pub use render_result::RenderResult;
