//! Error types for the take-home pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise at the configuration boundary; the calculation functions
//! themselves are total over numeric input and never fail, since out-of-range
//! values clamp or fall back to auto-derived lookups.

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// # Example
///
/// ```
/// use tedori_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table failed structural validation after loading.
    #[error("Invalid rate table '{table}': {message}")]
    InvalidTable {
        /// The name of the offending table.
        table: String,
        /// A description of what made the table invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
