//! Scalar function resolution.

use crate::types::PrimitiveType;

/// Resolves a scalar function call to its return type.
///
/// Implementations own the function catalog; the expression layer only asks
/// for the return type of `name` applied to arguments of the given types.
pub trait FunctionResolver {
    /// Return type of `name(arg_types...)`, or `None` if no signature matches
    fn resolve(&self, name: &str, arg_types: &[PrimitiveType]) -> Option<PrimitiveType>;
}

/// The small set of scalar functions every query can use
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFunctions;

impl FunctionResolver for BuiltinFunctions {
    fn resolve(&self, name: &str, arg_types: &[PrimitiveType]) -> Option<PrimitiveType> {
        let numeric = |t: &PrimitiveType| t.is_numeric() || t.is_null();
        let integer = |t: &PrimitiveType| t.is_integer() || t.is_null();
        let string = |t: &PrimitiveType| t.is_string() || t.is_null();
        let date = |t: &PrimitiveType| t.is_date_type() || t.is_null();

        match (name.to_lowercase().as_str(), arg_types) {
            ("abs", [t]) if t.is_null() => Some(PrimitiveType::BigInt),
            ("abs", [t]) if numeric(t) => Some(*t),
            ("ceil" | "floor", [t]) if numeric(t) => Some(PrimitiveType::BigInt),
            ("round", [t]) if numeric(t) => Some(PrimitiveType::Double),
            ("round", [t, d]) if numeric(t) && integer(d) => Some(PrimitiveType::Double),
            ("sqrt", [t]) if numeric(t) => Some(PrimitiveType::Double),
            ("length", [t]) if string(t) => Some(PrimitiveType::Int),
            ("lower" | "upper" | "trim", [t]) if string(t) => Some(PrimitiveType::String),
            ("concat", args) if !args.is_empty() && args.iter().all(string) => {
                Some(PrimitiveType::String)
            }
            ("substr", [s, pos]) if string(s) && integer(pos) => Some(PrimitiveType::String),
            ("substr", [s, pos, len]) if string(s) && integer(pos) && integer(len) => {
                Some(PrimitiveType::String)
            }
            ("coalesce", [first, rest @ ..]) => rest
                .iter()
                .try_fold(*first, |acc, t| {
                    let wider = PrimitiveType::assignment_compatible(acc, *t);
                    wider.is_valid().then_some(wider)
                }),
            ("now", []) => Some(PrimitiveType::Timestamp),
            ("year", [t]) if date(t) => Some(PrimitiveType::Int),
            _ => None,
        }
    }
}
