//! Cross-cutting error types for the Baleen admin client.
//!
//! Domain-specific errors (`ConfigError`, `ApiError`) are defined in their
//! respective crates. They converge into `anyhow` in `baleen-cli`.

use thiserror::Error;

/// Errors that can be raised by any Baleen admin crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup returned no result where one was required.
    #[error("{kind} not found: {key}")]
    NotFound { kind: String, key: String },

    /// Data failed validation (structure, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
