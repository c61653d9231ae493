//! ORDER BY items.

use crate::expr::node::Expr;
use crate::expr::substitution::SubstitutionMap;

/// An ordering expression and its direction
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    expr: Expr,
    is_asc: bool,
}

impl OrderByElement {
    pub fn new(expr: Expr, is_asc: bool) -> Self {
        Self { expr, is_asc }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn is_asc(&self) -> bool {
        self.is_asc
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }

    pub fn clone_with(&self, smap: Option<&SubstitutionMap>) -> Self {
        Self::new(self.expr.clone_with(smap), self.is_asc)
    }

    pub fn substitute(self, smap: &SubstitutionMap) -> Self {
        Self::new(self.expr.substitute(smap), self.is_asc)
    }

    /// Ordering expressions of `elements`, in order
    pub fn ordering_exprs(elements: &[OrderByElement]) -> Vec<&Expr> {
        elements.iter().map(|e| &e.expr).collect()
    }

    pub fn to_sql(&self) -> String {
        let dir = if self.is_asc { "ASC" } else { "DESC" };
        format!("{} {}", self.expr.to_sql(), dir)
    }

    pub fn debug_string(&self) -> String {
        format!(
            "OrderByElement{{asc={} {}}}",
            self.is_asc,
            self.expr.debug_string()
        )
    }
}
