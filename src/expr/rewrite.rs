//! Deep copy and substitution.

use crate::expr::node::Expr;
use crate::expr::substitution::SubstitutionMap;

impl Expr {
    /// Deep copy of the tree, replacing every subtree that matches a pattern
    /// of `smap`.
    ///
    /// A node is checked against the map before it is copied. On a match the
    /// replacement is copied as-is (it is not substituted again) and the
    /// node's own children are not visited.
    pub fn clone_with(&self, smap: Option<&SubstitutionMap>) -> Expr {
        if let Some(replacement) = smap.and_then(|m| m.get(self)) {
            log::trace!("Substituting {}", self.debug_string());
            return replacement.clone();
        }

        Expr {
            kind: self.kind.clone(),
            children: self.children.iter().map(|c| c.clone_with(smap)).collect(),
            ty: self.ty,
        }
    }

    /// Deep copy of every expression in `exprs`, in order.
    pub fn clone_list(exprs: &[Expr], smap: Option<&SubstitutionMap>) -> Vec<Expr> {
        exprs.iter().map(|e| e.clone_with(smap)).collect()
    }

    /// Rewrite the tree according to `smap` and return the result.
    ///
    /// If the root matches, a copy of the replacement is returned. Otherwise
    /// the children are rewritten recursively and the same tree is returned;
    /// nodes that do not match are moved, not copied. Callers always rebind
    /// their reference to the returned tree.
    ///
    /// Resolved types of ancestors of replaced nodes are left unchanged;
    /// re-analyze if the replacement can change them.
    pub fn substitute(mut self, smap: &SubstitutionMap) -> Expr {
        if let Some(replacement) = smap.get(&self) {
            log::trace!("Substituting {}", self.debug_string());
            return replacement.clone();
        }

        let children = std::mem::take(&mut self.children);
        self.children = children.into_iter().map(|c| c.substitute(smap)).collect();
        self
    }

    /// Rewrite every expression of `exprs` in place.
    pub fn substitute_list(exprs: &mut Vec<Expr>, smap: &SubstitutionMap) {
        let taken = std::mem::take(exprs);
        *exprs = taken.into_iter().map(|e| e.substitute(smap)).collect();
    }
}
