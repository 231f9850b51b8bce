// Core modules
pub mod builtins;
pub mod config;
pub mod error;
pub mod interpolation;

// Re-export commonly used types
pub use error::{Result, TagscriptError};
pub use interpolation::{
    HandlerDescriptor, HandlerError, HandlerResult, InterpolationEngine, PlaceholderKind,
    PlaceholderListing, RenderResult,
};
