//! Configuration models and environment loading.
//!
//! This crate owns the keepsake config schema, validation, and the
//! environment-variable loader used by both the server binary and SDK.

mod env;
mod error;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;
