//! Error types for expression analysis.

use crate::descriptor::SlotId;
use crate::types::PrimitiveType;
use thiserror::Error;

/// Errors raised while analyzing an expression tree.
///
/// Analysis is fail-fast: the first error in the post-order walk is returned
/// and the partially analyzed tree must be discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Slot {slot_id} is not registered in the analyzer's scope")]
    UnknownSlot { slot_id: SlotId },

    #[error("Slot {slot_id} has no resolved type")]
    UnresolvedSlotType { slot_id: SlotId },

    #[error("Invalid operand types for operator {operator}: left={left}, right={}", format_opt_type(.right))]
    InvalidOperandTypes {
        operator: String,
        left: PrimitiveType,
        right: Option<PrimitiveType>,
    },

    #[error("Incompatible types in '{expression}': {left} and {right}")]
    IncompatibleTypes {
        expression: String,
        left: PrimitiveType,
        right: PrimitiveType,
    },

    #[error("Operand of {operator} must be BOOLEAN, got {actual}")]
    NonBooleanOperand {
        operator: String,
        actual: PrimitiveType,
    },

    #[error("Invalid type cast of {from} to {to}")]
    InvalidCast {
        from: PrimitiveType,
        to: PrimitiveType,
    },

    #[error("No matching function with signature: {name}({})", format_types(.arg_types))]
    UnknownFunction {
        name: String,
        arg_types: Vec<PrimitiveType>,
    },

    #[error("{function} requires a numeric argument, got {arg_type}")]
    InvalidAggregateArgument {
        function: String,
        arg_type: PrimitiveType,
    },

    #[error("Aggregate function cannot contain aggregate parameters: {expression}")]
    NestedAggregate { expression: String },

    #[error("Exceeded the maximum expression depth ({limit})")]
    ExprDepthLimit { limit: usize },

    #[error("Expression has {actual} children, the maximum is {limit}")]
    ExprChildrenLimit { limit: usize, actual: usize },

    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Unknown column: {name}")]
    UnknownColumn { name: String },

    #[error("Column '{name}' is ambiguous")]
    AmbiguousColumn { name: String },
}

fn format_opt_type(ty: &Option<PrimitiveType>) -> String {
    ty.map(|t| t.to_string()).unwrap_or_else(|| "none".to_string())
}

fn format_types(types: &[PrimitiveType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
