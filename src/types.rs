//! Scalar SQL types.
//!
//! Every expression node and every slot starts out as [`PrimitiveType::Invalid`]
//! and is assigned a real type by analysis (or by binding a catalog column).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data types known to the analyzer
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Not resolved yet
    Invalid = 0,
    /// Type of a bare NULL literal, compatible with everything
    Null = 1,
    Boolean = 2,
    TinyInt = 3,
    SmallInt = 4,
    Int = 5,
    BigInt = 6,
    Float = 7,
    Double = 8,
    Date = 9,
    DateTime = 10,
    Timestamp = 11,
    String = 12,
}

impl PrimitiveType {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PrimitiveType::Invalid),
            1 => Ok(PrimitiveType::Null),
            2 => Ok(PrimitiveType::Boolean),
            3 => Ok(PrimitiveType::TinyInt),
            4 => Ok(PrimitiveType::SmallInt),
            5 => Ok(PrimitiveType::Int),
            6 => Ok(PrimitiveType::BigInt),
            7 => Ok(PrimitiveType::Float),
            8 => Ok(PrimitiveType::Double),
            9 => Ok(PrimitiveType::Date),
            10 => Ok(PrimitiveType::DateTime),
            11 => Ok(PrimitiveType::Timestamp),
            12 => Ok(PrimitiveType::String),
            _ => bail!("Unknown primitive type: {}", value),
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != PrimitiveType::Invalid
    }

    pub fn is_null(&self) -> bool {
        *self == PrimitiveType::Null
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            PrimitiveType::TinyInt
                | PrimitiveType::SmallInt
                | PrimitiveType::Int
                | PrimitiveType::BigInt
        )
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_floating_point()
    }

    pub fn is_date_type(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Date | PrimitiveType::DateTime | PrimitiveType::Timestamp
        )
    }

    pub fn is_string(&self) -> bool {
        *self == PrimitiveType::String
    }

    /// Returns the type both `a` and `b` can be assigned to, or `Invalid` if
    /// there is none.
    ///
    /// Numeric types widen in declaration order (TINYINT < ... < DOUBLE),
    /// date types widen towards TIMESTAMP, NULL adopts the other side.
    pub fn assignment_compatible(a: PrimitiveType, b: PrimitiveType) -> PrimitiveType {
        if !a.is_valid() || !b.is_valid() {
            return PrimitiveType::Invalid;
        }
        if a == b {
            return a;
        }
        if a.is_null() {
            return b;
        }
        if b.is_null() {
            return a;
        }
        if (a.is_numeric() && b.is_numeric()) || (a.is_date_type() && b.is_date_type()) {
            return a.max(b);
        }
        PrimitiveType::Invalid
    }

    /// Whether an explicit CAST from `self` to `target` is allowed.
    ///
    /// NULL casts to anything. Numeric, string, boolean and date types cast
    /// among each other, except between date types and BOOLEAN.
    pub fn is_castable_to(&self, target: PrimitiveType) -> bool {
        if !self.is_valid() || !target.is_valid() || target.is_null() {
            return false;
        }
        if self.is_null() || *self == target {
            return true;
        }
        let boolean = |t: &PrimitiveType| *t == PrimitiveType::Boolean;
        !((self.is_date_type() && boolean(&target)) || (boolean(self) && target.is_date_type()))
    }

    /// SQL spelling, as used in CAST and in debug output
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Invalid => "INVALID_TYPE",
            PrimitiveType::Null => "NULL_TYPE",
            PrimitiveType::Boolean => "BOOLEAN",
            PrimitiveType::TinyInt => "TINYINT",
            PrimitiveType::SmallInt => "SMALLINT",
            PrimitiveType::Int => "INT",
            PrimitiveType::BigInt => "BIGINT",
            PrimitiveType::Float => "FLOAT",
            PrimitiveType::Double => "DOUBLE",
            PrimitiveType::Date => "DATE",
            PrimitiveType::DateTime => "DATETIME",
            PrimitiveType::Timestamp => "TIMESTAMP",
            PrimitiveType::String => "STRING",
        }
    }
}

impl Default for PrimitiveType {
    fn default() -> Self {
        PrimitiveType::Invalid
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
