//! Operator definitions for expressions.

use crate::types::PrimitiveType;
use serde::Serialize;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl ArithmeticOp {
    /// Get the output type of this operator given input types
    pub fn output_type(&self, left: PrimitiveType, right: PrimitiveType) -> Option<PrimitiveType> {
        let numeric = |t: PrimitiveType| t.is_numeric() || t.is_null();
        if !numeric(left) || !numeric(right) {
            return None;
        }

        match self {
            // Division always produces a floating point result
            ArithmeticOp::Divide => Some(PrimitiveType::Double),
            ArithmeticOp::Modulo => {
                let integer = |t: PrimitiveType| t.is_integer() || t.is_null();
                if integer(left) && integer(right) {
                    Some(PrimitiveType::assignment_compatible(left, right))
                } else {
                    None
                }
            }
            ArithmeticOp::Add | ArithmeticOp::Subtract | ArithmeticOp::Multiply => {
                Some(PrimitiveType::assignment_compatible(left, right))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
            ArithmeticOp::Modulo => "%",
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    /// Comparisons are boolean whenever the operands share an
    /// assignment-compatible type.
    pub fn output_type(&self, left: PrimitiveType, right: PrimitiveType) -> Option<PrimitiveType> {
        PrimitiveType::assignment_compatible(left, right)
            .is_valid()
            .then_some(PrimitiveType::Boolean)
    }

    /// The operator obtained by swapping the operands (`a < b` == `b > a`)
    pub fn converse(&self) -> BinaryOp {
        match self {
            BinaryOp::Eq => BinaryOp::Eq,
            BinaryOp::Ne => BinaryOp::Ne,
            BinaryOp::Lt => BinaryOp::Gt,
            BinaryOp::Le => BinaryOp::Ge,
            BinaryOp::Gt => BinaryOp::Lt,
            BinaryOp::Ge => BinaryOp::Le,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompoundOp {
    And,
    Or,
    Not,
}

impl CompoundOp {
    /// Number of operands the connective takes
    pub fn arity(&self) -> usize {
        match self {
            CompoundOp::Not => 1,
            CompoundOp::And | CompoundOp::Or => 2,
        }
    }

    pub fn accepts(&self, operand: PrimitiveType) -> bool {
        operand == PrimitiveType::Boolean || operand.is_null()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundOp::And => "AND",
            CompoundOp::Or => "OR",
            CompoundOp::Not => "NOT",
        }
    }
}

/// Pattern matching operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LikeOp {
    Like,
    RLike,
    Regexp,
}

impl LikeOp {
    pub fn output_type(&self, left: PrimitiveType, right: PrimitiveType) -> Option<PrimitiveType> {
        let string = |t: PrimitiveType| t.is_string() || t.is_null();
        (string(left) && string(right)).then_some(PrimitiveType::Boolean)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikeOp::Like => "LIKE",
            LikeOp::RLike => "RLIKE",
            LikeOp::Regexp => "REGEXP",
        }
    }
}

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AggregateOp {
    Count,
    Sum,
    Min,
    Max,
    Avg,
}

impl AggregateOp {
    /// Output type for an aggregate over `arg`; `None` means the argument
    /// type is not accepted. `arg` is `None` only for `COUNT(*)`.
    pub fn output_type(&self, arg: Option<PrimitiveType>) -> Option<PrimitiveType> {
        match self {
            AggregateOp::Count => Some(PrimitiveType::BigInt),
            AggregateOp::Sum => match arg? {
                t if t.is_integer() || t.is_null() => Some(PrimitiveType::BigInt),
                t if t.is_floating_point() => Some(PrimitiveType::Double),
                _ => None,
            },
            AggregateOp::Avg => match arg? {
                t if t.is_numeric() || t.is_null() => Some(PrimitiveType::Double),
                _ => None,
            },
            AggregateOp::Min | AggregateOp::Max => arg.filter(|t| t.is_valid()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateOp::Count => "COUNT",
            AggregateOp::Sum => "SUM",
            AggregateOp::Min => "MIN",
            AggregateOp::Max => "MAX",
            AggregateOp::Avg => "AVG",
        }
    }
}
