//! Error types for the Result Aggregation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while assembling termly reports.

use thiserror::Error;

/// The main error type for the Result Aggregation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Missing or empty input data is deliberately NOT represented here:
/// a learner with no qualifying assessment records aggregates to zero
/// totals, not an error.
///
/// # Example
///
/// ```
/// use result_engine::error::EngineError;
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

    /// The grading scale configuration was structurally invalid.
    #[error("Invalid grading scale: {message}")]
    InvalidGradingScale {
        /// A description of what made the scale invalid.
        message: String,
    },

    /// A class name was not found in the data store.
    #[error("Class not found: {class_name}")]
    UnknownClass {
        /// The class name that was not found.
        class_name: String,
    },

    /// A learner id was not found in the data store.
    #[error("Learner not found: {learner_id}")]
    UnknownLearner {
        /// The learner id that was not found.
        learner_id: String,
    },

    /// The data store could not serve a read.
    ///
    /// Propagated fatally: the engine has no partial-result semantics
    /// to fall back to.
    #[error("Data store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// A rendering sink failed to serialize an assembled report.
    #[error("Report rendering failed: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
