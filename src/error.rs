//! Centralized error types for mailforge.

use thiserror::Error;

/// All errors produced by the mailforge library.
///
/// Message building never fails; the only fallible operation is mapping a
/// quality tier string to an exporter factory.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// The requested quality tier is not one of `low`, `high`, `master`.
    #[error("Unknown output quality option: {0}")]
    UnknownQuality(String),
}

/// Convenience alias for `Result<T, ForgeError>`.
pub type Result<T> = std::result::Result<T, ForgeError>;
