//! Depth-first traversal of a record's descriptor table.

use crate::error::ResolveError;
use crate::field::{EnvBind, Field, Slot};
use crate::report::{FieldIssue, IssueKind, Report};
use crate::resolve::{self, Origin};
use crate::source::Source;
use crate::tag;

/// Walks one record tree against one source, collecting a [`Report`].
pub(crate) struct Walker<'s, S: ?Sized> {
    source: &'s S,
    path: Vec<&'static str>,
    report: Report,
}

impl<'s, S: Source + ?Sized> Walker<'s, S> {
    pub(crate) fn new(source: &'s S) -> Self {
        Self {
            source,
            path: Vec::new(),
            report: Report::default(),
        }
    }

    pub(crate) fn finish(self) -> Report {
        self.report
    }

    pub(crate) fn walk(&mut self, record: &mut dyn EnvBind) {
        for field in record.fields() {
            self.path.push(field.name);
            self.visit(field);
            self.path.pop();
        }
    }

    fn visit(&mut self, field: Field<'_>) {
        let value = match field.slot {
            // Nested records need no tag of their own.
            Slot::Record(inner) => {
                self.walk(inner);
                return;
            }
            Slot::Unsupported(kind) => {
                let tag = tag::parse(field.tag);
                if !tag.is_empty() {
                    tracing::debug!(field = %self.dotted(), key = tag.key(), %kind, "unsupported field kind left untouched");
                    self.issue(tag.key(), IssueKind::Unsupported { kind });
                }
                return;
            }
            Slot::Value(value) => value,
        };

        let tag = tag::parse(field.tag);
        if tag.is_empty() {
            return;
        }

        let resolved = resolve::resolve(self.source, tag.key(), tag.file_fallback());
        let (text, from_file) = match resolved {
            Ok(raw) => {
                tracing::trace!(field = %self.dotted(), key = tag.key(), origin = ?raw.origin, "resolved");
                let from_file = matches!(raw.origin, Origin::File { .. });
                (raw.text, from_file)
            }
            Err(ResolveError::FileRead { name, path, source }) => {
                tracing::debug!(field = %self.dotted(), key = %name, %path, error = %source, "secret file unreadable, binding empty text");
                self.issue(
                    tag.key(),
                    IssueKind::FileRead {
                        path,
                        message: source.to_string(),
                    },
                );
                (String::new(), false)
            }
        };

        self.report.written += 1;
        if let Err(e) = value.assign(&text) {
            tracing::debug!(field = %self.dotted(), key = tag.key(), type_name = e.type_name, "coercion failed, field set to zero");
            // File contents may be secrets; keep them out of the report.
            let text = if from_file {
                String::from("<file contents>")
            } else {
                e.text
            };
            self.issue(
                tag.key(),
                IssueKind::Coercion {
                    text,
                    type_name: e.type_name,
                    message: e.message,
                },
            );
        }
    }

    fn issue(&mut self, key: &str, kind: IssueKind) {
        self.report.issues.push(FieldIssue {
            field: self.dotted(),
            key: key.to_string(),
            kind,
        });
    }

    fn dotted(&self) -> String {
        self.path.join(".")
    }
}
