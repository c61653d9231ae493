//! Canonical keys for hash-based lookup of expressions.

use crate::expr::node::Expr;

/// Canonical byte encoding of an expression tree.
///
/// The encoding covers exactly what [`Expr`] equality covers: variant,
/// payload and children, but not resolved types or slot labels. Equal
/// expressions therefore always produce equal keys, which makes `ExprKey`
/// usable as a `HashMap`/`HashSet` key where `Expr` itself is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprKey(Vec<u8>);

impl ExprKey {
    pub fn new(expr: &Expr) -> bincode::Result<Self> {
        Ok(Self(bincode::serialize(expr)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
