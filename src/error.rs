//! Error types for template construction and rendering

use thiserror::Error;

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while building or rendering templates
///
/// Helpers in this crate follow a soft-fail policy: failures raised inside
/// caller-supplied closures are swallowed and reported as an empty rendered
/// string. The variants below cover the two places an error is actually
/// surfaced or carried.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template invocation whose segment and value counts do not line up.
    /// A valid invocation always has exactly one more literal segment than
    /// expression values.
    #[error("template has {segments} literal segments but {values} expression values")]
    SegmentMismatch { segments: usize, values: usize },

    /// Failure reported by a caller-supplied condition closure
    #[error("condition evaluation failed: {message}")]
    Condition { message: String },

    /// Failed to convert a serializable context value into a template value
    #[error("failed to convert context value: {message}")]
    Context { message: String },
}

impl TemplateError {
    /// Wrap an arbitrary error raised inside a lazy condition.
    pub fn condition(err: impl std::fmt::Display) -> Self {
        TemplateError::Condition {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Context {
            message: err.to_string(),
        }
    }
}
