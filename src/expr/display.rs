//! SQL and debug rendering of expression trees.

use crate::expr::node::{Expr, ExprKind};
use crate::expr::operator::CompoundOp;

impl Expr {
    /// Render the tree as a SQL fragment. Never fails; malformed or
    /// unlabelled nodes render as placeholders.
    pub fn to_sql(&self) -> String {
        match &self.kind {
            ExprKind::SlotRef(slot_ref) => match slot_ref.label() {
                Some(label) => label.to_string(),
                None => format!("_slot_{}", slot_ref.slot_id()),
            },
            ExprKind::Literal(value) => value.to_sql(),
            ExprKind::Arithmetic(op) => self.infix_sql(op.as_str()),
            ExprKind::BinaryPredicate(op) => self.infix_sql(op.as_str()),
            ExprKind::CompoundPredicate(CompoundOp::Not) => {
                format!("NOT {}", self.operand_sql(0))
            }
            ExprKind::CompoundPredicate(op) => self.infix_sql(op.as_str()),
            ExprKind::IsNullPredicate { negated } => {
                let op = if *negated { "IS NOT NULL" } else { "IS NULL" };
                format!("{} {}", self.operand_sql(0), op)
            }
            ExprKind::LikePredicate(op) => self.infix_sql(op.as_str()),
            ExprKind::InPredicate { negated } => {
                let list: Vec<String> = self.children.iter().skip(1).map(Expr::to_sql).collect();
                let op = if *negated { "NOT IN" } else { "IN" };
                format!("{} {} ({})", self.operand_sql(0), op, list.join(", "))
            }
            ExprKind::BetweenPredicate { negated } => {
                let op = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                format!(
                    "{} {} {} AND {}",
                    self.operand_sql(0),
                    op,
                    self.operand_sql(1),
                    self.operand_sql(2)
                )
            }
            ExprKind::Cast { target } => {
                format!("CAST({} AS {})", self.arg_sql(0), target.as_str())
            }
            ExprKind::FunctionCall { name } => {
                let args: Vec<String> = self.children.iter().map(Expr::to_sql).collect();
                format!("{}({})", name, args.join(", "))
            }
            ExprKind::Aggregate { op, distinct } => {
                if self.children.is_empty() {
                    return format!("{}(*)", op.as_str());
                }
                let distinct = if *distinct { "DISTINCT " } else { "" };
                format!("{}({}{})", op.as_str(), distinct, self.arg_sql(0))
            }
        }
    }

    /// S-expression style dump for diagnostics:
    /// `Variant{payload (child child ...)}`.
    pub fn debug_string(&self) -> String {
        let (name, payload) = match &self.kind {
            ExprKind::SlotRef(slot_ref) => {
                let mut payload = format!(
                    "slot_id={} tuple_id={}",
                    slot_ref.slot_id(),
                    slot_ref.tuple_id()
                );
                if let Some(label) = slot_ref.label() {
                    payload.push_str(&format!(" col={}", label));
                }
                ("SlotRef", Some(payload))
            }
            ExprKind::Literal(value) => (
                value.debug_name(),
                value.debug_value().map(|v| format!("value={}", v)),
            ),
            ExprKind::Arithmetic(op) => ("ArithmeticExpr", Some(format!("op={}", op.as_str()))),
            ExprKind::BinaryPredicate(op) => {
                ("BinaryPredicate", Some(format!("op={}", op.as_str())))
            }
            ExprKind::CompoundPredicate(op) => {
                ("CompoundPredicate", Some(format!("op={}", op.as_str())))
            }
            ExprKind::IsNullPredicate { negated } => {
                ("IsNullPredicate", Some(format!("not_null={}", negated)))
            }
            ExprKind::LikePredicate(op) => ("LikePredicate", Some(format!("op={}", op.as_str()))),
            ExprKind::InPredicate { negated } => {
                ("InPredicate", Some(format!("not_in={}", negated)))
            }
            ExprKind::BetweenPredicate { negated } => {
                ("BetweenPredicate", Some(format!("not_between={}", negated)))
            }
            ExprKind::Cast { target } => ("CastExpr", Some(format!("target={}", target))),
            ExprKind::FunctionCall { name } => ("FunctionCallExpr", Some(format!("name={}", name))),
            ExprKind::Aggregate { op, distinct } => (
                "AggregateExpr",
                Some(format!("op={} distinct={}", op.as_str(), distinct)),
            ),
        };

        let parts: Vec<String> = payload
            .into_iter()
            .chain(Some(Expr::debug_string_list(&self.children)))
            .filter(|s| !s.is_empty())
            .collect();
        format!("{}{{{}}}", name, parts.join(" "))
    }

    /// Debug rendering of a list: empty for an empty list, otherwise the
    /// items' debug strings space-joined inside parentheses.
    pub fn debug_string_list(exprs: &[Expr]) -> String {
        if exprs.is_empty() {
            return String::new();
        }
        let items: Vec<String> = exprs.iter().map(Expr::debug_string).collect();
        format!("({})", items.join(" "))
    }

    fn infix_sql(&self, op: &str) -> String {
        format!("{} {} {}", self.operand_sql(0), op, self.operand_sql(1))
    }

    /// Operand of an operator, parenthesised when it is itself an operator
    fn operand_sql(&self, index: usize) -> String {
        let Some(child) = self.children.get(index) else {
            return "?".to_string();
        };
        match child.kind {
            ExprKind::SlotRef(_)
            | ExprKind::Literal(_)
            | ExprKind::Cast { .. }
            | ExprKind::FunctionCall { .. }
            | ExprKind::Aggregate { .. } => child.to_sql(),
            _ => format!("({})", child.to_sql()),
        }
    }

    /// Argument inside a call's parentheses, never wrapped
    fn arg_sql(&self, index: usize) -> String {
        self.children
            .get(index)
            .map(Expr::to_sql)
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::node::Expr;
    use crate::expr::operator::{AggregateOp, LikeOp};
    use crate::types::PrimitiveType;

    #[test]
    fn test_to_sql() {
        assert_eq!(Expr::gt(Expr::int(1), Expr::int(2)).to_sql(), "1 > 2");
        assert_eq!(
            Expr::mul_expr(Expr::add_expr(Expr::int(1), Expr::int(2)), Expr::int(3)).to_sql(),
            "(1 + 2) * 3"
        );
        assert_eq!(
            Expr::not_expr(Expr::and(Expr::bool(true), Expr::bool(false))).to_sql(),
            "NOT (TRUE AND FALSE)"
        );
        assert_eq!(Expr::is_not_null(Expr::null()).to_sql(), "NULL IS NOT NULL");
        assert_eq!(
            Expr::like(LikeOp::Like, Expr::string("abc"), Expr::string("a%")).to_sql(),
            "'abc' LIKE 'a%'"
        );
        assert_eq!(
            Expr::in_list(Expr::int(1), vec![Expr::int(2), Expr::int(3)], true).to_sql(),
            "1 NOT IN (2, 3)"
        );
        assert_eq!(
            Expr::between(Expr::int(2), Expr::int(1), Expr::int(3), false).to_sql(),
            "2 BETWEEN 1 AND 3"
        );
        assert_eq!(
            Expr::cast(Expr::add_expr(Expr::int(1), Expr::int(2)), PrimitiveType::String)
                .to_sql(),
            "CAST(1 + 2 AS STRING)"
        );
        assert_eq!(
            Expr::function("Concat", vec![Expr::string("a"), Expr::string("b")]).to_sql(),
            "concat('a', 'b')"
        );
        assert_eq!(Expr::count_star().to_sql(), "COUNT(*)");
        assert_eq!(
            Expr::aggregate(AggregateOp::Sum, Expr::int(1), true).to_sql(),
            "SUM(DISTINCT 1)"
        );
    }

    #[test]
    fn test_debug_string() {
        assert_eq!(Expr::int(5).debug_string(), "IntLiteral{value=5}");
        assert_eq!(Expr::null().debug_string(), "NullLiteral{}");
        assert_eq!(
            Expr::gt(Expr::int(5), Expr::string("x")).debug_string(),
            "BinaryPredicate{op=> (IntLiteral{value=5} StringLiteral{value=x})}"
        );
        assert_eq!(
            Expr::count_star().debug_string(),
            "AggregateExpr{op=COUNT distinct=false}"
        );
    }

    #[test]
    fn test_debug_string_list() {
        let a = Expr::int(1);
        let b = Expr::bool(true);
        assert_eq!(Expr::debug_string_list(&[]), "");
        assert_eq!(
            Expr::debug_string_list(std::slice::from_ref(&a)),
            format!("({})", a.debug_string())
        );
        assert_eq!(
            Expr::debug_string_list(&[a.clone(), b.clone()]),
            format!("({} {})", a.debug_string(), b.debug_string())
        );
    }
}
