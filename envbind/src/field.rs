//! Field descriptors generated by `#[derive(EnvBind)]`.
//!
//! A record exposes its settable fields as a table of [`Field`]s. Each entry
//! carries the field name, its raw tag string and a [`Slot`]: a typed
//! mutable handle obtained through [`Bindable`].

use crate::binder::Binder;
use crate::coerce::{coerce_list, Coerce, Element};
use crate::error::{BindError, CoerceError};
use crate::source::Source;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Shape of a field as seen by the binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Bool,
    Signed,
    Unsigned,
    Float,
    Text,
    /// Variable-length, comma-separated list.
    Sequence,
    /// Array with a length fixed by its type. Never written.
    FixedSequence,
    /// String-keyed map. Never written.
    Mapping,
    /// Nested record, walked recursively.
    Record,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "boolean",
            Self::Signed => "signed integer",
            Self::Unsigned => "unsigned integer",
            Self::Float => "floating point",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::FixedSequence => "fixed-size sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
        })
    }
}

/// A leaf field that can be written from text.
pub trait Value {
    fn kind(&self) -> Kind;

    /// Overwrite `self` with the coercion of `text`.
    ///
    /// The field is always written. On failure it receives its zero value
    /// and the error is returned for diagnostics.
    fn assign(&mut self, text: &str) -> Result<(), CoerceError>;
}

/// Typed mutable handle to a field.
pub enum Slot<'a> {
    Record(&'a mut dyn EnvBind),
    Value(&'a mut dyn Value),
    Unsupported(Kind),
}

impl Slot<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Record(_) => Kind::Record,
            Self::Value(value) => value.kind(),
            Self::Unsupported(kind) => *kind,
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// Types that may appear as fields of an `EnvBind` record.
pub trait Bindable {
    fn slot(&mut self) -> Slot<'_>;
}

/// One entry of a record's descriptor table.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    /// Raw `KEY[,option]*` tag, empty when the field is untagged.
    pub tag: &'static str,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, tag: &'static str, slot: Slot<'a>) -> Self {
        Self { name, tag, slot }
    }
}

/// A record whose fields are bound from the environment.
///
/// Implemented by `#[derive(EnvBind)]`; importing `envbind::EnvBind` brings
/// both the derive and this trait into scope.
pub trait EnvBind {
    /// Settable fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Build a `Default` instance and bind it from the process environment.
    fn from_env() -> Result<Self, BindError>
    where
        Self: Sized + Default + Bindable,
    {
        Self::from_source(&crate::source::ProcessEnv)
    }

    /// Build a `Default` instance and bind it from `source`.
    fn from_source<S: Source>(source: &S) -> Result<Self, BindError>
    where
        Self: Sized + Default + Bindable,
    {
        let mut record = Self::default();
        Binder::with_source(source).bind(&mut record)?;
        Ok(record)
    }
}

fn assign_scalar<T: Coerce>(slot: &mut T, text: &str) -> Result<(), CoerceError> {
    match T::coerce(text) {
        Ok(value) => {
            *slot = value;
            Ok(())
        }
        Err(e) => {
            *slot = T::default();
            Err(e)
        }
    }
}

macro_rules! scalar_field {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Value for $t {
                fn kind(&self) -> Kind {
                    <$t as Coerce>::KIND
                }

                fn assign(&mut self, text: &str) -> Result<(), CoerceError> {
                    assign_scalar(self, text)
                }
            }

            impl Bindable for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Value(self)
                }
            }
        )+
    };
}

scalar_field!(bool, String);
scalar_field!(i8, i16, i32, i64, i128, isize);
scalar_field!(u8, u16, u32, u64, u128, usize);
scalar_field!(f32, f64);

impl<T: Element> Value for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn assign(&mut self, text: &str) -> Result<(), CoerceError> {
        let (values, error) = coerce_list(text);
        *self = values;
        error.map_or(Ok(()), Err)
    }
}

impl<T: Element> Bindable for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Value(self)
    }
}

impl<T, const N: usize> Bindable for [T; N] {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(Kind::FixedSequence)
    }
}

impl<V, H> Bindable for HashMap<String, V, H> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(Kind::Mapping)
    }
}

impl<V> Bindable for BTreeMap<String, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(Kind::Mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_slots_report_kind() {
        assert_eq!(true.slot().kind(), Kind::Bool);
        assert_eq!(0_i16.slot().kind(), Kind::Signed);
        assert_eq!(0_usize.slot().kind(), Kind::Unsigned);
        assert_eq!(0_f32.slot().kind(), Kind::Float);
        assert_eq!(String::new().slot().kind(), Kind::Text);
        assert_eq!(Vec::<u8>::new().slot().kind(), Kind::Sequence);
        assert_eq!([0_u8; 2].slot().kind(), Kind::FixedSequence);
        assert_eq!(HashMap::<String, u8>::new().slot().kind(), Kind::Mapping);
        assert_eq!(BTreeMap::<String, u8>::new().slot().kind(), Kind::Mapping);
    }

    #[test]
    fn test_assign_overwrites_with_zero_on_failure() {
        let mut port: u16 = 8080;
        assert!(port.assign("-1").is_err());
        assert_eq!(port, 0);

        let mut ratio: f64 = 0.5;
        assert!(ratio.assign("").is_ok());
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_assign_sequence() {
        let mut hosts = vec!["stale".to_string()];
        hosts.assign("a, ,b").unwrap();
        assert_eq!(hosts, vec!["a", "b"]);

        let mut ids: Vec<u32> = Vec::new();
        let err = ids.assign("5,-5").unwrap_err();
        assert_eq!(ids, vec![5, 0]);
        assert_eq!(err.text, "-5");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::FixedSequence.to_string(), "fixed-size sequence");
        assert_eq!(Kind::Mapping.to_string(), "mapping");
    }
}
