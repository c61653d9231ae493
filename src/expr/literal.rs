//! Literal values.

use crate::types::PrimitiveType;
use serde::Serialize;

/// Constant value of a literal expression.
///
/// `Serialize` exists for [`ExprKey`](crate::expr::ExprKey) only.
#[derive(Debug, Clone, Serialize)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl LiteralValue {
    /// Type of the literal. Integers get the narrowest integer type that
    /// holds the value.
    pub fn ty(&self) -> PrimitiveType {
        match self {
            LiteralValue::Null => PrimitiveType::Null,
            LiteralValue::Boolean(_) => PrimitiveType::Boolean,
            LiteralValue::Int(v) => {
                if i8::try_from(*v).is_ok() {
                    PrimitiveType::TinyInt
                } else if i16::try_from(*v).is_ok() {
                    PrimitiveType::SmallInt
                } else if i32::try_from(*v).is_ok() {
                    PrimitiveType::Int
                } else {
                    PrimitiveType::BigInt
                }
            }
            LiteralValue::Double(_) => PrimitiveType::Double,
            LiteralValue::String(_) => PrimitiveType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }

    pub fn to_sql(&self) -> String {
        match self {
            LiteralValue::Null => "NULL".to_string(),
            LiteralValue::Boolean(true) => "TRUE".to_string(),
            LiteralValue::Boolean(false) => "FALSE".to_string(),
            LiteralValue::Int(v) => v.to_string(),
            LiteralValue::Double(v) => format!("{:?}", v),
            LiteralValue::String(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }

    pub(crate) fn debug_name(&self) -> &'static str {
        match self {
            LiteralValue::Null => "NullLiteral",
            LiteralValue::Boolean(_) => "BoolLiteral",
            LiteralValue::Int(_) => "IntLiteral",
            LiteralValue::Double(_) => "FloatLiteral",
            LiteralValue::String(_) => "StringLiteral",
        }
    }

    pub(crate) fn debug_value(&self) -> Option<String> {
        match self {
            LiteralValue::Null => None,
            LiteralValue::Boolean(b) => Some(b.to_string()),
            LiteralValue::Int(v) => Some(v.to_string()),
            LiteralValue::Double(v) => Some(format!("{:?}", v)),
            LiteralValue::String(s) => Some(s.clone()),
        }
    }
}

// Doubles compare by bit pattern so equality agrees with the canonical
// encoding used by `ExprKey`.
impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::Null, LiteralValue::Null) => true,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Int(a), LiteralValue::Int(b)) => a == b,
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_types() {
        assert_eq!(LiteralValue::Null.ty(), PrimitiveType::Null);
        assert_eq!(LiteralValue::Boolean(true).ty(), PrimitiveType::Boolean);
        assert_eq!(LiteralValue::Int(5).ty(), PrimitiveType::TinyInt);
        assert_eq!(LiteralValue::Int(300).ty(), PrimitiveType::SmallInt);
        assert_eq!(LiteralValue::Int(-70_000).ty(), PrimitiveType::Int);
        assert_eq!(LiteralValue::Int(1 << 40).ty(), PrimitiveType::BigInt);
        assert_eq!(LiteralValue::Double(1.5).ty(), PrimitiveType::Double);
        assert_eq!(
            LiteralValue::String("x".to_string()).ty(),
            PrimitiveType::String
        );
    }

    #[test]
    fn test_literal_sql() {
        assert_eq!(LiteralValue::Null.to_sql(), "NULL");
        assert_eq!(LiteralValue::Boolean(false).to_sql(), "FALSE");
        assert_eq!(LiteralValue::Int(-3).to_sql(), "-3");
        assert_eq!(LiteralValue::Double(2.0).to_sql(), "2.0");
        assert_eq!(
            LiteralValue::String("it's".to_string()).to_sql(),
            "'it''s'"
        );
    }

    #[test]
    fn test_double_equality_by_bits() {
        assert_eq!(LiteralValue::Double(f64::NAN), LiteralValue::Double(f64::NAN));
        assert_ne!(LiteralValue::Double(0.0), LiteralValue::Double(-0.0));
        assert_ne!(LiteralValue::Int(1), LiteralValue::Double(1.0));
    }
}
