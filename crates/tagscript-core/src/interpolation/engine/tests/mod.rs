//! Tests for the interpolation engine
//!
//! Organized into focused submodules.

// Test helper functions
mod helpers;
