use std::str::FromStr;
use thiserror::Error;

use crate::model::{Value, ValueKind};

/// Behaviour to bind a Rust type `T` to a declared [`ValueKind`].
///
/// The coercion engine produces a [`Value`] for the kind, which `from_value` unwraps back into `T`.
/// `clbind` implements this for `bool`, the fixed width integers, `f32`, `f64`, `String`, and `Option<T>` of each.
pub trait Primitive: Sized {
    /// The declared kind for this type.
    const KIND: ValueKind;

    /// Unwrap a coerced value.
    /// Returns `None` when the value was coerced as a different kind.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! primitive {
    ($type:ty, $kind:ident) => {
        impl Primitive for $type {
            const KIND: ValueKind = ValueKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

primitive!(bool, Bool);
primitive!(i8, Int8);
primitive!(u8, UInt8);
primitive!(i16, Int16);
primitive!(u16, UInt16);
primitive!(i32, Int32);
primitive!(u32, UInt32);
primitive!(i64, Int64);
primitive!(u64, UInt64);
primitive!(f32, Float32);
primitive!(f64, Float64);
primitive!(String, String);

impl<T: Primitive> Primitive for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }
}

/// A raw token which could not be coerced into the declared kind of its parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ERROR: Bad parameter value. ParameterName=\"{flag}\" Value=\"{raw}\"\n{}", .kind.expectation())]
pub struct CoercionError {
    flag: String,
    raw: String,
    kind: ValueKind,
}

impl CoercionError {
    pub(crate) fn new(flag: impl Into<String>, raw: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            flag: flag.into(),
            raw: raw.into(),
            kind,
        }
    }

    /// The flag of the parameter being bound.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The offending raw text, exactly as provided.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The declared kind the raw text failed to coerce into.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Coerce the `raw` token into a value of the declared `kind`.
///
/// Numeric and boolean tokens are matched after trimming surrounding whitespace.
/// The boolean kind accepts only `true` or `false` (case-insensitive).
/// The string kind accepts any text verbatim.
///
/// ### Example
/// ```
/// # use clbind_builder as clbind;
/// use clbind::{coerce, Value, ValueKind};
///
/// assert_eq!(coerce(ValueKind::Int32, "count", "42").unwrap(), Value::Int32(42));
///
/// let error = coerce(ValueKind::UInt32, "count", "-1").unwrap_err();
/// assert_eq!(error.raw(), "-1");
/// assert!(error.to_string().contains("32-bit unsigned"));
/// ```
pub fn coerce(kind: ValueKind, flag: &str, raw: &str) -> Result<Value, CoercionError> {
    let token = raw.trim();
    let value = match kind {
        ValueKind::Bool => coerce_bool(token),
        ValueKind::Int8 => token.parse().ok().map(Value::Int8),
        ValueKind::UInt8 => unsigned(token).map(Value::UInt8),
        ValueKind::Int16 => token.parse().ok().map(Value::Int16),
        ValueKind::UInt16 => unsigned(token).map(Value::UInt16),
        ValueKind::Int32 => token.parse().ok().map(Value::Int32),
        ValueKind::UInt32 => unsigned(token).map(Value::UInt32),
        ValueKind::Int64 => token.parse().ok().map(Value::Int64),
        ValueKind::UInt64 => unsigned(token).map(Value::UInt64),
        ValueKind::Float32 => token.parse().ok().map(Value::Float32),
        ValueKind::Float64 => token.parse().ok().map(Value::Float64),
        ValueKind::String => Some(Value::String(raw.to_string())),
    };

    value.ok_or_else(|| CoercionError::new(flag, raw, kind))
}

// A negative zero (`-0`, `-00`) is still zero.
fn unsigned<T: FromStr>(token: &str) -> Option<T> {
    match token.strip_prefix('-') {
        Some(magnitude) if !magnitude.is_empty() && magnitude.bytes().all(|b| b == b'0') => {
            magnitude.parse().ok()
        }
        _ => token.parse().ok(),
    }
}

fn coerce_bool(token: &str) -> Option<Value> {
    if token.eq_ignore_ascii_case("true") {
        Some(Value::Bool(true))
    } else if token.eq_ignore_ascii_case("false") {
        Some(Value::Bool(false))
    } else {
        None
    }
}
