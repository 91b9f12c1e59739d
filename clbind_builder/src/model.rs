/// The declared type of a parameter.
///
/// Every [`Parameter`](crate::Parameter) resolves to exactly one kind, derived from its Rust type via [`Primitive`](crate::Primitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `bool`
    Bool,
    /// `i8`
    Int8,
    /// `u8`
    UInt8,
    /// `i16`
    Int16,
    /// `u16`
    UInt16,
    /// `i32`
    Int32,
    /// `u32`
    UInt32,
    /// `i64`
    Int64,
    /// `u64`
    UInt64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// `String`
    String,
}

impl ValueKind {
    /// The human readable expectation shown when a value fails to coerce into this kind.
    pub fn expectation(&self) -> &'static str {
        match self {
            ValueKind::Bool => "Value must be a boolean value (e.g. true/false)",
            ValueKind::Int8 => "Value must be a signed byte value [-128:127]",
            ValueKind::UInt8 => "Value must be an unsigned byte value [0:255]",
            ValueKind::Int16 => "Value must be a 16-bit signed integer",
            ValueKind::UInt16 => "Value must be a 16-bit unsigned integer",
            ValueKind::Int32 => "Value must be a 32-bit signed integer",
            ValueKind::UInt32 => "Value must be a 32-bit unsigned integer",
            ValueKind::Int64 => "Value must be a 64-bit signed integer",
            ValueKind::UInt64 => "Value must be a 64-bit unsigned integer",
            ValueKind::Float32 | ValueKind::Float64 => {
                "Value must be a floating point number (e.g. 1.0)"
            }
            ValueKind::String => "Value may be any text",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int8 => "int8",
            ValueKind::UInt8 => "uint8",
            ValueKind::Int16 => "int16",
            ValueKind::UInt16 => "uint16",
            ValueKind::Int32 => "int32",
            ValueKind::UInt32 => "uint32",
            ValueKind::Int64 => "int64",
            ValueKind::UInt64 => "uint64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::String => "string",
        };
        write!(f, "{name}")
    }
}

/// A successfully coerced parameter value, tagged by its [`ValueKind`].
// The variants mirror `ValueKind` one to one.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl Value {
    /// The kind this value was coerced as.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int8(_) => ValueKind::Int8,
            Value::UInt8(_) => ValueKind::UInt8,
            Value::Int16(_) => ValueKind::Int16,
            Value::UInt16(_) => ValueKind::UInt16,
            Value::Int32(_) => ValueKind::Int32,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::Int64(_) => ValueKind::Int64,
            Value::UInt64(_) => ValueKind::UInt64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::String(_) => ValueKind::String,
        }
    }
}
