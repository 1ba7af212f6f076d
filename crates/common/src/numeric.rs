use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Bool,
    Utf8,
}

impl NumericKind {
    pub fn is_signed_integer(&self) -> bool {
        matches!(
            self,
            NumericKind::Int8 | NumericKind::Int16 | NumericKind::Int32 | NumericKind::Int64
        )
    }

    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            NumericKind::UInt8 | NumericKind::UInt16 | NumericKind::UInt32 | NumericKind::UInt64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer() || self.is_float()
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::UInt8 => "uint8",
            NumericKind::UInt16 => "uint16",
            NumericKind::UInt32 => "uint32",
            NumericKind::UInt64 => "uint64",
            NumericKind::Float32 => "float32",
            NumericKind::Float64 => "float64",
            NumericKind::Bool => "bool",
            NumericKind::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeValue {
    Signed(i64),
    Unsigned(u64),
    Float(OrderedFloat<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: RangeValue,
    pub max: RangeValue,
}

impl NumericRange {
    fn signed(min: i64, max: i64) -> Self {
        Self {
            min: RangeValue::Signed(min),
            max: RangeValue::Signed(max),
        }
    }

    fn unsigned(max: u64) -> Self {
        Self {
            min: RangeValue::Unsigned(0),
            max: RangeValue::Unsigned(max),
        }
    }

    fn unbounded_float() -> Self {
        Self {
            min: RangeValue::Float(OrderedFloat(f64::NEG_INFINITY)),
            max: RangeValue::Float(OrderedFloat(f64::INFINITY)),
        }
    }
}

/// Bounds of the values a column of `kind` can hold.
///
/// Integer kinds report their representable range. Floating point kinds
/// report negative and positive infinity, so any finite value compares inside.
pub fn numeric_range(kind: NumericKind) -> Result<NumericRange> {
    let range = match kind {
        NumericKind::Int8 => NumericRange::signed(i8::MIN.into(), i8::MAX.into()),
        NumericKind::Int16 => NumericRange::signed(i16::MIN.into(), i16::MAX.into()),
        NumericKind::Int32 => NumericRange::signed(i32::MIN.into(), i32::MAX.into()),
        NumericKind::Int64 => NumericRange::signed(i64::MIN, i64::MAX),
        NumericKind::UInt8 => NumericRange::unsigned(u8::MAX.into()),
        NumericKind::UInt16 => NumericRange::unsigned(u16::MAX.into()),
        NumericKind::UInt32 => NumericRange::unsigned(u32::MAX.into()),
        NumericKind::UInt64 => NumericRange::unsigned(u64::MAX),
        NumericKind::Float32 | NumericKind::Float64 => NumericRange::unbounded_float(),
        NumericKind::Bool | NumericKind::Utf8 => {
            return Err(Error::unsupported_type(format!(
                "no numeric range for type {}",
                kind
            )));
        }
    };
    Ok(range)
}
