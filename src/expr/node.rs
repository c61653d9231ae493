//! Expression tree nodes.

use crate::descriptor::{SlotDescriptor, SlotId, TupleId};
use crate::expr::literal::LiteralValue;
use crate::expr::operator::{AggregateOp, ArithmeticOp, BinaryOp, CompoundOp, LikeOp};
use crate::types::PrimitiveType;
use serde::Serialize;

/// Reference to a slot of a registered tuple
#[derive(Debug, Clone, Serialize)]
pub struct SlotRef {
    tuple_id: TupleId,
    slot_id: SlotId,
    /// Qualified column name, display only
    #[serde(skip)]
    label: Option<String>,
}

impl SlotRef {
    pub fn tuple_id(&self) -> TupleId {
        self.tuple_id
    }

    pub fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

// Labels are cosmetic. The tuple id takes part so that equal references are
// always bound by the same tuples.
impl PartialEq for SlotRef {
    fn eq(&self, other: &Self) -> bool {
        self.tuple_id == other.tuple_id && self.slot_id == other.slot_id
    }
}

/// Variant tag of an expression node together with its non-child payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind {
    /// Column reference, leaf
    SlotRef(SlotRef),
    /// Constant, leaf
    Literal(LiteralValue),
    /// `lhs op rhs`
    Arithmetic(ArithmeticOp),
    /// `lhs op rhs` comparison
    BinaryPredicate(BinaryOp),
    /// AND / OR over two children, NOT over one
    CompoundPredicate(CompoundOp),
    IsNullPredicate { negated: bool },
    LikePredicate(LikeOp),
    /// First child is the compared expression, the rest is the list
    InPredicate { negated: bool },
    /// Compared expression, lower bound, upper bound
    BetweenPredicate { negated: bool },
    Cast { target: PrimitiveType },
    /// Scalar function, name is lower-case
    FunctionCall { name: String },
    /// No children for `COUNT(*)`, one otherwise
    Aggregate { op: AggregateOp, distinct: bool },
}

impl ExprKind {
    pub fn class(&self) -> ExprClass {
        match self {
            ExprKind::SlotRef(_) => ExprClass::SlotRef,
            ExprKind::Literal(_) => ExprClass::Literal,
            ExprKind::Arithmetic(_) => ExprClass::Arithmetic,
            ExprKind::BinaryPredicate(_) => ExprClass::BinaryPredicate,
            ExprKind::CompoundPredicate(_) => ExprClass::CompoundPredicate,
            ExprKind::IsNullPredicate { .. } => ExprClass::IsNullPredicate,
            ExprKind::LikePredicate(_) => ExprClass::LikePredicate,
            ExprKind::InPredicate { .. } => ExprClass::InPredicate,
            ExprKind::BetweenPredicate { .. } => ExprClass::BetweenPredicate,
            ExprKind::Cast { .. } => ExprClass::Cast,
            ExprKind::FunctionCall { .. } => ExprClass::FunctionCall,
            ExprKind::Aggregate { .. } => ExprClass::Aggregate,
        }
    }
}

/// Payload-free discriminant of [`ExprKind`], used for tree searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprClass {
    SlotRef,
    Literal,
    Arithmetic,
    BinaryPredicate,
    CompoundPredicate,
    IsNullPredicate,
    LikePredicate,
    InPredicate,
    BetweenPredicate,
    Cast,
    FunctionCall,
    Aggregate,
}

/// A node of a scalar expression tree.
///
/// The node owns its children; `Clone` is a full deep copy. Nodes start with
/// an `Invalid` type, which [`Expr::analyze`] replaces.
///
/// Two nodes are equal when their kinds (variant and payload) are equal and
/// their children are pairwise equal. The resolved type does not take part,
/// so a tree compares equal to itself before and after analysis.
///
/// `Expr` does not implement `Hash`; use
/// [`ExprKey`](crate::expr::ExprKey) to key hash maps by expression.
///
/// The `Serialize` impls on `Expr`, [`ExprKind`] and [`LiteralValue`] only
/// feed `ExprKey`. The encoding is not a storage or wire format and may
/// change between versions.
#[derive(Debug, Clone, Serialize)]
pub struct Expr {
    pub(crate) kind: ExprKind,
    pub(crate) children: Vec<Expr>,
    #[serde(skip)]
    pub(crate) ty: PrimitiveType,
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.children == other.children
    }
}

impl Expr {
    fn new(kind: ExprKind, children: Vec<Expr>) -> Self {
        Self {
            kind,
            children,
            ty: PrimitiveType::Invalid,
        }
    }

    /// Create a reference to the slot described by `desc`
    pub fn slot_ref(desc: &SlotDescriptor) -> Self {
        Self::new(
            ExprKind::SlotRef(SlotRef {
                tuple_id: desc.parent(),
                slot_id: desc.id(),
                label: desc.label().map(str::to_string),
            }),
            vec![],
        )
    }

    /// Create a reference to a slot by id, without a display label
    pub fn slot(tuple_id: TupleId, slot_id: SlotId) -> Self {
        Self::new(
            ExprKind::SlotRef(SlotRef {
                tuple_id,
                slot_id,
                label: None,
            }),
            vec![],
        )
    }

    /// Create a literal expression
    pub fn literal(value: LiteralValue) -> Self {
        Self::new(ExprKind::Literal(value), vec![])
    }

    pub fn null() -> Self {
        Self::literal(LiteralValue::Null)
    }

    pub fn bool(value: bool) -> Self {
        Self::literal(LiteralValue::Boolean(value))
    }

    pub fn int(value: i64) -> Self {
        Self::literal(LiteralValue::Int(value))
    }

    pub fn double(value: f64) -> Self {
        Self::literal(LiteralValue::Double(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::String(value.into()))
    }

    /// Create an arithmetic expression
    pub fn arithmetic(op: ArithmeticOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::Arithmetic(op), vec![left, right])
    }

    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Self::arithmetic(ArithmeticOp::Add, left, right)
    }

    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Self::arithmetic(ArithmeticOp::Subtract, left, right)
    }

    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Self::arithmetic(ArithmeticOp::Multiply, left, right)
    }

    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Self::arithmetic(ArithmeticOp::Divide, left, right)
    }

    pub fn mod_expr(left: Expr, right: Expr) -> Self {
        Self::arithmetic(ArithmeticOp::Modulo, left, right)
    }

    /// Create a comparison expression
    pub fn binary_predicate(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::BinaryPredicate(op), vec![left, right])
    }

    pub fn eq(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Eq, left, right)
    }

    pub fn ne(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Ne, left, right)
    }

    pub fn lt(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Lt, left, right)
    }

    pub fn le(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Le, left, right)
    }

    pub fn gt(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Gt, left, right)
    }

    pub fn ge(left: Expr, right: Expr) -> Self {
        Self::binary_predicate(BinaryOp::Ge, left, right)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::new(
            ExprKind::CompoundPredicate(CompoundOp::And),
            vec![left, right],
        )
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::CompoundPredicate(CompoundOp::Or), vec![left, right])
    }

    pub fn not_expr(operand: Expr) -> Self {
        Self::new(ExprKind::CompoundPredicate(CompoundOp::Not), vec![operand])
    }

    pub fn is_null(operand: Expr) -> Self {
        Self::new(ExprKind::IsNullPredicate { negated: false }, vec![operand])
    }

    pub fn is_not_null(operand: Expr) -> Self {
        Self::new(ExprKind::IsNullPredicate { negated: true }, vec![operand])
    }

    pub fn like(op: LikeOp, value: Expr, pattern: Expr) -> Self {
        Self::new(ExprKind::LikePredicate(op), vec![value, pattern])
    }

    /// `expr [NOT] IN (list...)`. Panics on an empty list.
    pub fn in_list(expr: Expr, list: Vec<Expr>, negated: bool) -> Self {
        assert!(!list.is_empty(), "IN predicate requires a non-empty list");
        let mut children = Vec::with_capacity(list.len() + 1);
        children.push(expr);
        children.extend(list);
        Self::new(ExprKind::InPredicate { negated }, children)
    }

    pub fn between(expr: Expr, low: Expr, high: Expr, negated: bool) -> Self {
        Self::new(
            ExprKind::BetweenPredicate { negated },
            vec![expr, low, high],
        )
    }

    pub fn cast(expr: Expr, target: PrimitiveType) -> Self {
        Self::new(ExprKind::Cast { target }, vec![expr])
    }

    /// Scalar function call. The name is case-insensitive.
    pub fn function(name: &str, args: Vec<Expr>) -> Self {
        Self::new(
            ExprKind::FunctionCall {
                name: name.to_lowercase(),
            },
            args,
        )
    }

    pub fn aggregate(op: AggregateOp, arg: Expr, distinct: bool) -> Self {
        Self::new(ExprKind::Aggregate { op, distinct }, vec![arg])
    }

    pub fn count_star() -> Self {
        Self::new(
            ExprKind::Aggregate {
                op: AggregateOp::Count,
                distinct: false,
            },
            vec![],
        )
    }

    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    pub fn class(&self) -> ExprClass {
        self.kind.class()
    }

    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Expr> {
        self.children.get(index)
    }

    /// Resolved type, `Invalid` until analysis succeeds
    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    /// Overwrite the resolved type, e.g. after a rewrite changed a child
    pub fn set_ty(&mut self, ty: PrimitiveType) {
        self.ty = ty;
    }

    pub fn is_analyzed(&self) -> bool {
        self.ty.is_valid()
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Literal(_))
    }

    /// Returns the slot reference payload if this is a `SlotRef` node
    pub fn as_slot_ref(&self) -> Option<&SlotRef> {
        match &self.kind {
            ExprKind::SlotRef(slot_ref) => Some(slot_ref),
            _ => None,
        }
    }

    /// True if the tree references no slots
    pub fn is_constant(&self) -> bool {
        !matches!(self.kind, ExprKind::SlotRef(_)) && self.children.iter().all(Expr::is_constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorTable;
    use crate::expr::substitution::SubstitutionMap;

    #[test]
    fn test_builders_set_children() {
        let expr = Expr::add_expr(Expr::int(1), Expr::int(2));
        assert_eq!(expr.class(), ExprClass::Arithmetic);
        assert_eq!(expr.children().len(), 2);
        assert_eq!(expr.ty(), PrimitiveType::Invalid);

        let expr = Expr::in_list(Expr::int(1), vec![Expr::int(2), Expr::int(3)], true);
        assert_eq!(expr.children().len(), 3);
        assert_eq!(expr.kind(), &ExprKind::InPredicate { negated: true });

        assert!(Expr::count_star().children().is_empty());
    }

    #[test]
    #[should_panic(expected = "non-empty list")]
    fn test_empty_in_list() {
        Expr::in_list(Expr::int(1), vec![], false);
    }

    #[test]
    fn test_equality_ignores_type() {
        let a = Expr::gt(Expr::int(1), Expr::int(2));
        let mut b = a.clone();
        b.set_ty(PrimitiveType::Boolean);
        b.children[0].ty = PrimitiveType::TinyInt;
        assert!(b.is_analyzed());
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_compares_payload_and_children() {
        assert_ne!(
            Expr::gt(Expr::int(1), Expr::int(2)),
            Expr::lt(Expr::int(1), Expr::int(2))
        );
        assert_ne!(
            Expr::gt(Expr::int(1), Expr::int(2)),
            Expr::gt(Expr::int(1), Expr::int(3))
        );
        assert_ne!(Expr::int(1), Expr::string("1"));
        assert_ne!(
            Expr::is_null(Expr::int(1)),
            Expr::is_not_null(Expr::int(1))
        );
    }

    #[test]
    fn test_slot_ref_equality_ignores_label() -> anyhow::Result<()> {
        let mut descs = DescriptorTable::new();
        let tid = descs.create_tuple_descriptor()?;
        let sid = descs.add_slot_descriptor(tid)?;
        let other = descs.add_slot_descriptor(tid)?;
        descs.get_slot_mut(sid).unwrap().set_label("t.a");

        let labelled = Expr::slot_ref(descs.get_slot(sid).unwrap());
        assert_eq!(labelled.as_slot_ref().unwrap().label(), Some("t.a"));
        assert_eq!(labelled, Expr::slot(tid, sid));
        assert_ne!(labelled, Expr::slot(tid, other));
        Ok(())
    }

    #[test]
    fn test_slot_ref_equality_includes_tuple() -> anyhow::Result<()> {
        let mut descs = DescriptorTable::new();
        let t1 = descs.create_tuple_descriptor()?;
        let t2 = descs.create_tuple_descriptor()?;
        let sid = descs.add_slot_descriptor(t1)?;

        let good = Expr::slot(t1, sid);
        let bad = Expr::slot(t2, sid);
        assert_ne!(good, bad);
        assert!(good.is_bound_by_tuple(t1));
        assert!(!bad.is_bound_by_tuple(t1));

        let mut smap = SubstitutionMap::new();
        smap.put(good.clone(), Expr::int(9));
        assert_eq!(good.substitute(&smap), Expr::int(9));
        assert_eq!(bad.clone().substitute(&smap), bad);
        Ok(())
    }

    #[test]
    fn test_function_name_is_case_insensitive() {
        assert_eq!(
            Expr::function("UPPER", vec![Expr::string("a")]),
            Expr::function("upper", vec![Expr::string("a")])
        );
    }

    #[test]
    fn test_is_constant() {
        let mut descs = DescriptorTable::new();
        let tid = descs.create_tuple_descriptor().unwrap();
        let sid = descs.add_slot_descriptor(tid).unwrap();

        assert!(Expr::add_expr(Expr::int(1), Expr::int(2)).is_constant());
        assert!(!Expr::add_expr(Expr::slot(tid, sid), Expr::int(2)).is_constant());
        assert!(Expr::function("now", vec![]).is_constant());
    }

    #[test]
    fn test_expr_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
    }
}
