//! Error types for environment binding

use crate::report::FieldIssue;

/// Errors returned by [`bind`](crate::bind) and [`Binder::bind`](crate::Binder::bind).
///
/// Per-field problems never abort a bind. They are only surfaced, as
/// [`BindError::Strict`], when strict mode is enabled.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The bind target is not a record.
    ///
    /// Occurs when binding into a scalar, a sequence, an array or a map
    /// instead of a struct deriving `EnvBind`. The target is left untouched.
    #[error("envbind: bind requires a mutable reference to a record, got `{type_name}`")]
    InvalidTarget {
        /// Type name of the rejected target
        type_name: &'static str,
    },

    /// Strict mode found fields that could not be bound cleanly.
    ///
    /// The record has still been populated exactly as in lenient mode.
    #[error("{} field(s) could not be bound: {}", .issues.len(), summarize(.issues))]
    Strict {
        /// Every absorbed per-field problem, in traversal order
        issues: Vec<FieldIssue>,
    },
}

impl BindError {
    pub(crate) fn invalid_target<T: ?Sized>() -> Self {
        Self::InvalidTarget {
            type_name: std::any::type_name::<T>(),
        }
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Text that cannot be converted to the target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {text:?} as {type_name}: {message}")]
pub struct CoerceError {
    /// Offending (trimmed) text
    pub text: String,
    /// Target type
    pub type_name: &'static str,
    /// Parser message
    pub message: String,
}

impl CoerceError {
    pub(crate) fn new<T>(text: &str, message: impl std::fmt::Display) -> Self {
        Self {
            text: text.to_string(),
            type_name: std::any::type_name::<T>(),
            message: message.to_string(),
        }
    }
}

/// Failure while resolving a raw value.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The file named by a `{VAR}_FILE` variable could not be read.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{VAR}_FILE` environment variable (e.g. "API_KEY_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
