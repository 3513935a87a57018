//! Common types and utilities shared across the crate.

/// Unified error types
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
