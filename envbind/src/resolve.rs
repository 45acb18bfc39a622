//! Resolution of a field's raw text from the environment.

use crate::error::ResolveError;
use crate::source::Source;
use std::path::Path;

/// Suffix appended to a key to find its secret file path.
pub const FILE_SUFFIX: &str = "_FILE";

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The variable itself.
    Env,
    /// The file named by `{KEY}_FILE`.
    File { path: String },
    /// Nothing was found.
    Missing,
}

/// Trimmed text associated with one field.
///
/// Empty text is valid and distinct from a missing value; coercion treats
/// both the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub text: String,
    pub origin: Origin,
}

impl RawValue {
    fn missing() -> Self {
        Self {
            text: String::new(),
            origin: Origin::Missing,
        }
    }
}

/// Resolve `key`, reporting file read failures.
///
/// Priority order:
/// 1. `key` itself
/// 2. the file whose path is stored in `{key}_FILE`, if `file_fallback`
/// 3. empty text
pub fn resolve<S>(source: &S, key: &str, file_fallback: bool) -> Result<RawValue, ResolveError>
where
    S: Source + ?Sized,
{
    if key.is_empty() {
        return Ok(RawValue::missing());
    }

    if let Some(value) = source.var(key) {
        return Ok(RawValue {
            text: value.trim().to_string(),
            origin: Origin::Env,
        });
    }

    if file_fallback {
        let file_var_name = format!("{key}{FILE_SUFFIX}");
        if let Some(file_path) = source.var(&file_var_name) {
            return source
                .read_file(Path::new(&file_path))
                .map(|s| RawValue {
                    text: s.trim().to_string(),
                    origin: Origin::File {
                        path: file_path.clone(),
                    },
                })
                .map_err(|e| ResolveError::FileRead {
                    name: file_var_name,
                    path: file_path,
                    source: e,
                });
        }
    }

    Ok(RawValue::missing())
}

/// Resolve `key` to trimmed text, absorbing every failure into empty text.
pub fn lookup<S>(source: &S, key: &str, file_fallback: bool) -> String
where
    S: Source + ?Sized,
{
    resolve(source, key, file_fallback)
        .map(|raw| raw.text)
        .unwrap_or_default()
}
