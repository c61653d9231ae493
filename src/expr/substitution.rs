//! Pattern/replacement maps for rewriting expression trees.

use crate::expr::node::Expr;

/// Ordered association of pattern trees (`lhs`) with replacement trees
/// (`rhs`); `lhs[i]` is replaced by `rhs[i]`.
///
/// Lookups scan in insertion order and the first structurally equal pattern
/// wins. Patterns are not checked for overlap: a map in which two patterns
/// can match the same subtree resolves to whichever was inserted first, and
/// callers that care must not build such maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionMap {
    lhs: Vec<Expr>,
    rhs: Vec<Expr>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern/replacement pair
    pub fn put(&mut self, lhs: Expr, rhs: Expr) {
        self.lhs.push(lhs);
        self.rhs.push(rhs);
    }

    /// Replacement for the first pattern equal to `expr`
    pub fn get(&self, expr: &Expr) -> Option<&Expr> {
        self.lhs
            .iter()
            .position(|pattern| pattern == expr)
            .map(|i| &self.rhs[i])
    }

    pub fn len(&self) -> usize {
        self.lhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty()
    }

    pub fn lhs(&self) -> &[Expr] {
        &self.lhs
    }

    pub fn rhs(&self) -> &[Expr] {
        &self.rhs
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Expr, &Expr)> {
        self.lhs.iter().zip(self.rhs.iter())
    }

    /// Concatenate two maps. Entries of `first` take precedence.
    pub fn combine(first: &SubstitutionMap, second: &SubstitutionMap) -> SubstitutionMap {
        let mut result = first.clone();
        for (lhs, rhs) in second.iter() {
            result.put(lhs.clone(), rhs.clone());
        }
        result
    }

    pub fn debug_string(&self) -> String {
        debug_assert_eq!(self.lhs.len(), self.rhs.len());
        let pairs: Vec<String> = self
            .iter()
            .map(|(lhs, rhs)| format!("{}:{}", lhs.debug_string(), rhs.debug_string()))
            .collect();
        format!("substmap({})", pairs.join(" "))
    }
}
