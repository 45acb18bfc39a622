//! Read-only access to environment variables and secret files.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::Path;

/// Key/value source consulted while binding.
///
/// The engine never mutates a source. Implement this to bind from something
/// other than the process environment.
pub trait Source {
    /// Look up a variable. `None` means the variable is not set, which is
    /// distinct from a variable set to the empty string.
    fn var(&self, key: &str) -> Option<String>;

    /// Read the file named by a `{KEY}_FILE` variable.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        (**self).read_file(path)
    }
}

/// The current process environment and the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // `env::var_os` rejects these keys on some platforms.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// In-memory environment, useful for tests and for binding from a snapshot.
///
/// Files are still read from the real filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

impl Source for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("A", "1").with("EMPTY", "");
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("EMPTY").as_deref(), Some(""));
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").as_deref(), Some("2"));
    }

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        env::set_var("ENVBIND_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.var("ENVBIND_SOURCE_TEST").as_deref(),
            Some("value")
        );
        env::remove_var("ENVBIND_SOURCE_TEST");
        assert_eq!(ProcessEnv.var("ENVBIND_SOURCE_TEST"), None);
    }

    #[test]
    fn test_process_env_rejects_invalid_keys() {
        assert_eq!(ProcessEnv.var(""), None);
        assert_eq!(ProcessEnv.var("A=B"), None);
        assert_eq!(ProcessEnv.var("A\0B"), None);
    }

    #[test]
    #[serial]
    fn test_map_env_from_process() {
        env::set_var("ENVBIND_SNAPSHOT_TEST", "snap");
        let snapshot = MapEnv::from_process();
        env::remove_var("ENVBIND_SNAPSHOT_TEST");
        assert_eq!(
            snapshot.var("ENVBIND_SNAPSHOT_TEST").as_deref(),
            Some("snap")
        );
    }
}
