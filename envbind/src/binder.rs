//! Entry points.

use crate::error::BindError;
use crate::field::{Bindable, Slot};
use crate::report::Report;
use crate::source::{ProcessEnv, Source};
use crate::walk::Walker;

/// Bind `target` from the process environment.
///
/// Only fails when `target` is not a record. Fields whose values are
/// missing, malformed or unreadable receive their zero value.
///
/// # Example
///
/// ```rust
/// use envbind::EnvBind;
///
/// #[derive(Debug, Default, EnvBind)]
/// struct Config {
///     #[env("BIND_DOC_WORKERS")]
///     pub workers: u8,
/// }
///
/// # fn main() -> Result<(), envbind::BindError> {
/// std::env::set_var("BIND_DOC_WORKERS", " 4 ");
/// let mut config = Config::default();
/// envbind::bind(&mut config)?;
/// assert_eq!(config.workers, 4);
///
/// // Anything that is not a record is rejected.
/// let mut workers = 0_u8;
/// assert!(envbind::bind(&mut workers).is_err());
/// # Ok(())
/// # }
/// ```
pub fn bind<T: Bindable + ?Sized>(target: &mut T) -> Result<(), BindError> {
    Binder::new().bind(target).map(drop)
}

/// Reusable, configurable binder.
///
/// ```rust
/// use envbind::{Binder, EnvBind, MapEnv};
///
/// #[derive(Default, EnvBind)]
/// struct Config {
///     #[env("PORT")]
///     pub port: u16,
/// }
///
/// let env = MapEnv::new().with("PORT", "-1");
///
/// let mut config = Config::default();
/// let report = Binder::with_source(&env).bind(&mut config).unwrap();
/// assert_eq!(config.port, 0);
/// assert_eq!(report.issues.len(), 1);
///
/// assert!(Binder::with_source(&env).strict(true).bind(&mut config).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder<S = ProcessEnv> {
    source: S,
    strict: bool,
}

impl Binder<ProcessEnv> {
    /// Binder reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Source> Binder<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            strict: false,
        }
    }

    /// In strict mode any absorbed per-field problem turns into
    /// [`BindError::Strict`]. Fields are written the same way either way.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Bind `target`, returning what happened to each field.
    pub fn bind<T: Bindable + ?Sized>(&self, target: &mut T) -> Result<Report, BindError> {
        let Slot::Record(record) = target.slot() else {
            return Err(BindError::invalid_target::<T>());
        };

        let type_name = std::any::type_name::<T>();
        tracing::debug!(target_type = type_name, strict = self.strict, "binding");

        let mut walker = Walker::new(&self.source);
        walker.walk(record);
        let report = walker.finish();

        tracing::debug!(
            target_type = type_name,
            written = report.written,
            issues = report.issues.len(),
            "bound"
        );

        if self.strict && !report.is_clean() {
            return Err(BindError::Strict {
                issues: report.issues,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{EnvBind, Field};
    use crate::report::IssueKind;
    use crate::source::MapEnv;
    use std::collections::HashMap;

    #[derive(Debug, Default, PartialEq)]
    struct Config {
        port: u16,
        hosts: Vec<String>,
    }

    impl EnvBind for Config {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("port", "PORT", self.port.slot()),
                Field::new("hosts", "HOSTS", self.hosts.slot()),
            ]
        }
    }

    impl Bindable for Config {
        fn slot(&mut self) -> Slot<'_> {
            Slot::Record(self)
        }
    }

    #[test]
    fn test_bind_rejects_non_records() {
        let binder = Binder::with_source(MapEnv::new().with("X", "1"));

        let mut number = 5_u32;
        let err = binder.bind(&mut number).unwrap_err();
        assert!(matches!(err, BindError::InvalidTarget { type_name: "u32" }));
        assert_eq!(number, 5);

        let mut list = vec![1_i32];
        assert!(binder.bind(&mut list).is_err());
        assert_eq!(list, vec![1]);

        let mut fixed = [1_u8; 3];
        assert!(binder.bind(&mut fixed).is_err());

        let mut map: HashMap<String, String> = HashMap::new();
        assert!(binder.bind(&mut map).is_err());

        let mut text = String::from("x");
        assert!(binder.bind(&mut text).is_err());
        assert_eq!(text, "x");
    }

    #[test]
    fn test_bind_lenient_always_succeeds() {
        let env = MapEnv::new().with("PORT", "99999").with("HOSTS", "a,b");
        let mut config = Config::default();

        let report = Binder::with_source(&env).bind(&mut config).unwrap();
        assert_eq!(config.port, 0);
        assert_eq!(config.hosts, vec!["a", "b"]);
        assert_eq!(report.written, 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_bind_strict_reports_and_still_writes() {
        let env = MapEnv::new().with("PORT", "eighty").with("HOSTS", "a");
        let mut config = Config {
            port: 80,
            hosts: Vec::new(),
        };

        let err = Binder::with_source(&env)
            .strict(true)
            .bind(&mut config)
            .unwrap_err();

        let BindError::Strict { issues } = err else {
            panic!("Expected Strict error");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "PORT");
        assert!(matches!(issues[0].kind, IssueKind::Coercion { .. }));
        assert_eq!(config.port, 0);
        assert_eq!(config.hosts, vec!["a"]);
    }

    #[test]
    fn test_bind_strict_clean() {
        let env = MapEnv::new().with("PORT", "8080");
        let mut config = Config::default();

        let report = Binder::with_source(&env)
            .strict(true)
            .bind(&mut config)
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(config.port, 8080);
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_bind_is_idempotent() {
        let env = MapEnv::new().with("PORT", "1").with("HOSTS", "x, y");
        let binder = Binder::with_source(env);
        let mut first = Config::default();
        let mut second = Config::default();

        binder.bind(&mut first).unwrap();
        binder.bind(&mut second).unwrap();
        binder.bind(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_source() {
        let env = MapEnv::new().with("PORT", "443");
        let config = Config::from_source(&env).unwrap();
        assert_eq!(config.port, 443);
    }
}
