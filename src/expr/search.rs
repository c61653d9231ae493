//! Tree searches and binding checks.

use crate::descriptor::{SlotId, TupleId};
use crate::expr::node::{Expr, ExprClass, ExprKind};

impl Expr {
    /// Append every node of class `class` in this tree (self included,
    /// pre-order) to `output`.
    pub fn collect<'a>(&'a self, class: ExprClass, output: &mut Vec<&'a Expr>) {
        if self.class() == class {
            output.push(self);
        }
        for child in &self.children {
            child.collect(class, output);
        }
    }

    /// [`Expr::collect`] over every tree of `exprs`, in order
    pub fn collect_list<'a>(exprs: &'a [Expr], class: ExprClass, output: &mut Vec<&'a Expr>) {
        for expr in exprs {
            expr.collect(class, output);
        }
    }

    /// True if any node of this tree has class `class`
    pub fn contains(&self, class: ExprClass) -> bool {
        self.class() == class || self.children.iter().any(|c| c.contains(class))
    }

    pub fn list_contains(exprs: &[Expr], class: ExprClass) -> bool {
        exprs.iter().any(|e| e.contains(class))
    }

    /// True if every slot referenced by this tree belongs to one of `tids`.
    ///
    /// A tree without slot references is bound by any set, including the
    /// empty one.
    pub fn is_bound_by(&self, tids: &[TupleId]) -> bool {
        match &self.kind {
            ExprKind::SlotRef(slot_ref) => tids.contains(&slot_ref.tuple_id()),
            _ => self.children.iter().all(|c| c.is_bound_by(tids)),
        }
    }

    pub fn is_bound_by_tuple(&self, tid: TupleId) -> bool {
        self.is_bound_by(&[tid])
    }

    /// True if every expression of `exprs` is bound by `tids`
    pub fn all_bound_by(exprs: &[Expr], tids: &[TupleId]) -> bool {
        exprs.iter().all(|e| e.is_bound_by(tids))
    }

    /// Add the tuple and slot ids referenced by this tree to the given
    /// lists, skipping ids that are already present.
    pub fn collect_ids(&self, tuple_ids: &mut Vec<TupleId>, slot_ids: &mut Vec<SlotId>) {
        if let ExprKind::SlotRef(slot_ref) = &self.kind {
            if !tuple_ids.contains(&slot_ref.tuple_id()) {
                tuple_ids.push(slot_ref.tuple_id());
            }
            if !slot_ids.contains(&slot_ref.slot_id()) {
                slot_ids.push(slot_ref.slot_id());
            }
        }
        for child in &self.children {
            child.collect_ids(tuple_ids, slot_ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorTable;
    use crate::expr::operator::AggregateOp;

    struct Fixture {
        t1: TupleId,
        t2: TupleId,
        a: Expr,
        b: Expr,
    }

    fn fixture() -> Fixture {
        let mut descs = DescriptorTable::new();
        let t1 = descs.create_tuple_descriptor().unwrap();
        let t2 = descs.create_tuple_descriptor().unwrap();
        let a = descs.add_slot_descriptor(t1).unwrap();
        let b = descs.add_slot_descriptor(t2).unwrap();
        Fixture {
            t1,
            t2,
            a: Expr::slot(t1, a),
            b: Expr::slot(t2, b),
        }
    }

    #[test]
    fn test_collect_pre_order() {
        let f = fixture();
        let tree = Expr::and(
            Expr::eq(f.a.clone(), Expr::int(1)),
            Expr::gt(f.b.clone(), f.a.clone()),
        );

        let mut found = Vec::new();
        tree.collect(ExprClass::SlotRef, &mut found);
        assert_eq!(found, vec![&f.a, &f.b, &f.a]);

        let mut found = Vec::new();
        tree.collect(ExprClass::BinaryPredicate, &mut found);
        assert_eq!(found.len(), 2);

        let mut found = Vec::new();
        tree.collect(ExprClass::CompoundPredicate, &mut found);
        assert_eq!(found, vec![&tree]);
    }

    #[test]
    fn test_collect_nested_matches() {
        let inner = Expr::aggregate(AggregateOp::Sum, Expr::int(1), false);
        let outer = Expr::aggregate(AggregateOp::Max, inner.clone(), false);

        let mut found = Vec::new();
        outer.collect(ExprClass::Aggregate, &mut found);
        assert_eq!(found, vec![&outer, &inner]);
    }

    #[test]
    fn test_collect_list_and_contains() {
        let f = fixture();
        let exprs = vec![Expr::int(1), Expr::is_null(f.b.clone())];

        let mut found = Vec::new();
        Expr::collect_list(&exprs, ExprClass::SlotRef, &mut found);
        assert_eq!(found, vec![&f.b]);

        assert!(Expr::list_contains(&exprs, ExprClass::IsNullPredicate));
        assert!(!Expr::list_contains(&exprs, ExprClass::Aggregate));
        assert!(!Expr::list_contains(&[], ExprClass::Literal));
        assert!(exprs[1].contains(ExprClass::SlotRef));
        assert!(!exprs[0].contains(ExprClass::SlotRef));
    }

    #[test]
    fn test_is_bound_by() {
        let f = fixture();
        let pred = Expr::eq(f.a.clone(), f.b.clone());

        assert!(f.a.is_bound_by_tuple(f.t1));
        assert!(!f.a.is_bound_by_tuple(f.t2));
        assert!(!pred.is_bound_by(&[f.t1]));
        assert!(pred.is_bound_by(&[f.t1, f.t2]));
        assert!(Expr::int(5).is_bound_by(&[]));
        assert!(Expr::add_expr(Expr::int(1), Expr::int(2)).is_bound_by(&[]));
    }

    #[test]
    fn test_all_bound_by() {
        let f = fixture();
        let exprs = vec![f.a.clone(), Expr::int(1)];
        assert!(Expr::all_bound_by(&exprs, &[f.t1]));
        assert!(!Expr::all_bound_by(&exprs, &[f.t2]));
        assert!(Expr::all_bound_by(&[], &[]));
    }

    #[test]
    fn test_collect_ids() {
        let f = fixture();
        let tree = Expr::and(
            Expr::eq(f.a.clone(), f.b.clone()),
            Expr::is_null(f.a.clone()),
        );

        let mut tuple_ids = Vec::new();
        let mut slot_ids = Vec::new();
        tree.collect_ids(&mut tuple_ids, &mut slot_ids);
        assert_eq!(tuple_ids, vec![f.t1, f.t2]);
        assert_eq!(slot_ids.len(), 2);
        assert_eq!(slot_ids[0], f.a.as_slot_ref().unwrap().slot_id());
    }
}
