//! Tag-driven environment variable binding with file-based secrets support
//!
//! `envbind` populates a typed configuration struct from environment
//! variables. Each field declares the variable it reads with a tag such as
//! `#[env("MYSQL_HOST")]`; nested structs are walked recursively. Secrets
//! mounted as files (Kubernetes Secrets, Docker Secrets) are supported with
//! the `file` option, which falls back to reading the file named by
//! `{KEY}_FILE`.
//!
//! # Features
//!
//! - **Declarative**: field descriptors generated by `#[derive(EnvBind)]`
//! - **File-based secrets**: `#[env("API_KEY,file")]` reads `API_KEY` or the
//!   file at `API_KEY_FILE`
//! - **Lists**: comma-separated values into `Vec<T>`
//! - **Forgiving**: a missing or malformed value leaves the field at its zero
//!   value instead of failing the whole load
//! - **Strict mode**: opt in to get every absorbed problem as an error
//!
//! # Value Parsing
//!
//! Values are trimmed before conversion.
//!
//! | field type | conversion |
//! |---|---|
//! | `bool` | `true`, `on`, `yes`, `1` (any case) are true, everything else is false |
//! | `i8`..`i128`, `isize` | base 10, zero on error |
//! | `u8`..`u128`, `usize` | base 10, zero on error (including negative text) |
//! | `f32`, `f64` | decimal or exponent notation, zero on error |
//! | `String` | the trimmed text |
//! | `Vec<T>` | split on `,`, tokens trimmed, empty tokens dropped |
//! | `[T; N]`, `HashMap<String, _>`, `BTreeMap<String, _>` | never written |
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     pub mysql: MySql,
//!
//!     #[env("NODES")]
//!     pub nodes: Vec<String>,
//! }
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct MySql {
//!     #[env("MYSQL_HOST")]
//!     pub host: String,
//!
//!     // Reads MYSQL_PASSWORD, or the file at MYSQL_PASSWORD_FILE
//!     #[env("MYSQL_PASSWORD,file")]
//!     pub password: String,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! #     std::env::set_var("MYSQL_HOST", "db.internal");
//! #     std::env::set_var("MYSQL_PASSWORD", "hunter2");
//! #     std::env::set_var("NODES", "a, b,,c");
//! let config = Config::from_env()?;
//! #     assert_eq!(config.mysql.host, "db.internal");
//! #     assert_eq!(config.nodes, vec!["a", "b", "c"]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env("KEY[,option]*")]`
//!
//! The first token names the environment variable, the following tokens are
//! options. The only recognized option is `file`.
//!
//! **Loading priority with `file`:**
//! 1. Direct env var (`API_KEY`) - for local development
//! 2. File path from env var (`API_KEY_FILE`) - for production
//!
//! A field without a tag (or with an empty key) is never written. A nested
//! struct needs no tag: it is walked field by field.
//!
//! ## `#[env(skip)]`
//!
//! Excludes a field. Private fields are always excluded, so only `pub`
//! fields can be bound.
//!
//! # Strict mode
//!
//! ```rust
//! use envbind::{BindError, Binder, EnvBind, MapEnv};
//!
//! #[derive(Default, EnvBind)]
//! struct Config {
//!     #[env("WORKERS")]
//!     pub workers: u32,
//! }
//!
//! let env = MapEnv::new().with("WORKERS", "-4");
//! let mut config = Config::default();
//! let err = Binder::with_source(env).strict(true).bind(&mut config);
//! assert!(matches!(err, Err(BindError::Strict { .. })));
//! ```

mod binder;
pub mod coerce;
mod error;
mod field;
mod report;
pub mod resolve;
pub mod source;
pub mod tag;
mod walk;

pub use binder::{bind, Binder};
pub use envbind_derive::EnvBind;
pub use error::{BindError, CoerceError, ResolveError};
pub use field::{Bindable, EnvBind, Field, Kind, Slot, Value};
pub use report::{FieldIssue, IssueKind, Report};
pub use source::{MapEnv, ProcessEnv, Source};

/// Misuse of the derive is rejected at compile time.
///
/// Only structs with named fields:
///
/// ```compile_fail
/// #[derive(envbind::EnvBind)]
/// enum Mode {
///     Fast,
/// }
/// ```
///
/// ```compile_fail
/// #[derive(envbind::EnvBind)]
/// struct Port(#[env("PORT")] pub u16);
/// ```
///
/// Tags are string literals:
///
/// ```compile_fail
/// #[derive(envbind::EnvBind)]
/// struct Config {
///     #[env(PORT)]
///     pub port: u16,
/// }
/// ```
///
/// One tag per field:
///
/// ```compile_fail
/// #[derive(envbind::EnvBind)]
/// struct Config {
///     #[env("PORT")]
///     #[env("HTTP_PORT")]
///     pub port: u16,
/// }
/// ```
///
/// Public fields must have a bindable type:
///
/// ```compile_fail
/// #[derive(envbind::EnvBind)]
/// struct Config {
///     #[env("FLAGS")]
///     pub flags: Vec<bool>,
/// }
/// ```
///
/// Unless they are skipped:
///
/// ```rust
/// #[derive(envbind::EnvBind)]
/// struct Config {
///     #[env(skip)]
///     pub flags: Vec<bool>,
///     started: std::time::Instant,
/// }
/// ```
#[doc(hidden)]
pub mod derive_misuse {}
