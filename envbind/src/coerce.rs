//! Conversions from trimmed text to field values.
//!
//! Every conversion here is lenient at the binding layer: a failure yields
//! the target type's zero value. The `Result` returned by [`Coerce::coerce`]
//! only exists so the walker can record what went wrong.

use crate::error::CoerceError;
use crate::field::Kind;

/// Text values accepted as `true`, compared case-insensitively.
pub const TRUTHY: [&str; 4] = ["true", "on", "yes", "1"];

/// List separator.
pub const LIST_SEPARATOR: char = ',';

/// Scalar conversion from trimmed text.
///
/// Empty text always converts to `Self::default()` without error.
pub trait Coerce: Sized + Default {
    /// Kind reported for fields of this type.
    const KIND: Kind;

    fn coerce(text: &str) -> Result<Self, CoerceError>;
}

/// Scalars that may appear as elements of a comma-separated list.
pub trait Element: Coerce {}

/// Case-insensitive membership in [`TRUTHY`]. Anything else is `false`.
pub fn coerce_bool(text: &str) -> bool {
    TRUTHY.iter().any(|t| text.eq_ignore_ascii_case(t))
}

/// Split on commas, trim each token and drop the empty ones.
pub fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Convert `text`, substituting the zero value on failure.
pub fn lenient<T: Coerce>(text: &str) -> T {
    T::coerce(text).unwrap_or_default()
}

/// Convert every list token of `text`. Tokens that fail become zero values
/// in place; the first failure, if any, is returned with the list.
pub fn coerce_list<T: Element>(text: &str) -> (Vec<T>, Option<CoerceError>) {
    let mut first_error = None;
    let values = split_list(text)
        .map(|token| {
            T::coerce(token).unwrap_or_else(|e| {
                first_error.get_or_insert(e);
                T::default()
            })
        })
        .collect();
    (values, first_error)
}

impl Coerce for bool {
    const KIND: Kind = Kind::Bool;

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        Ok(coerce_bool(text))
    }
}

impl Coerce for String {
    const KIND: Kind = Kind::Text;

    fn coerce(text: &str) -> Result<Self, CoerceError> {
        Ok(text.to_string())
    }
}

impl Element for String {}

macro_rules! coerce_from_str {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Coerce for $t {
                const KIND: Kind = $kind;

                fn coerce(text: &str) -> Result<Self, CoerceError> {
                    if text.is_empty() {
                        return Ok(Self::default());
                    }
                    text.parse::<$t>()
                        .map_err(|e| CoerceError::new::<$t>(text, e))
                }
            }

            impl Element for $t {}
        )+
    };
}

coerce_from_str!(Kind::Signed => i8, i16, i32, i64, i128, isize);
coerce_from_str!(Kind::Unsigned => u8, u16, u32, u64, u128, usize);
coerce_from_str!(Kind::Float => f32, f64);
