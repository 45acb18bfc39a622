//! Diagnostics collected while binding.

use crate::field::Kind;
use serde::Serialize;

/// Outcome of a successful bind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of leaf fields written.
    pub written: usize,
    /// Problems absorbed during the bind, in traversal order.
    pub issues: Vec<FieldIssue>,
}

impl Report {
    /// `true` when every tagged field was bound without a problem.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One absorbed per-field problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("field `{field}` ({key}): {kind}")]
pub struct FieldIssue {
    /// Dotted path from the bind target, e.g. `mysql.password`.
    pub field: String,
    /// Environment key from the field's tag.
    pub key: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IssueKind {
    /// The text did not parse; the field received its zero value.
    #[error("cannot parse {text:?} as {type_name}: {message}")]
    Coercion {
        text: String,
        type_name: &'static str,
        message: String,
    },

    /// The `{KEY}_FILE` file was unreadable; the field was bound from empty text.
    #[error("cannot read '{path}': {message}")]
    FileRead { path: String, message: String },

    /// The field's type cannot be bound and was left untouched.
    #[error("{kind} fields are not supported")]
    Unsupported { kind: Kind },
}
