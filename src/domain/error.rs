//! Error types for the Popcorn plugin.
//!
//! This module defines the centralized error type [`PopcornError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors never reach the rendered view directly. The stores in [`crate::app`]
//! turn failed requests into short user-facing messages and log the underlying
//! error with `tracing`.

use thiserror::Error;

/// The main error type for Popcorn plugin operations.
///
/// # Examples
///
/// ```
/// use popcorn::domain::PopcornError;
///
/// fn require_key(key: &str) -> Result<(), PopcornError> {
///     if key.is_empty() {
///         return Err(PopcornError::Config("api_key is not set".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(require_key("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum PopcornError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when the movie directory cannot be built, most commonly because
    /// no `api_key` was supplied in the plugin configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The movie directory answered with an explicit failure.
    ///
    /// OMDb reports these as `{"Response": "False", "Error": "..."}`; the
    /// string carries the remote message verbatim.
    #[error("Movie directory error: {0}")]
    Api(String),

    /// The request completed with a non-success HTTP status.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// A response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A user rating was outside the accepted `0..=10` range.
    #[error("Rating {0} is out of range (expected 0 to 10)")]
    InvalidRating(u8),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Popcorn operations.
pub type Result<T> = std::result::Result<T, PopcornError>;
