//! CLI command implementations

pub mod placeholders;
pub mod render;
