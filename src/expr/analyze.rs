//! Semantic analysis of expression trees.

use crate::analyzer::Analyzer;
use crate::expr::error::{AnalysisError, AnalysisResult};
use crate::expr::node::{Expr, ExprClass, ExprKind};
use crate::types::PrimitiveType;

impl Expr {
    /// Analyze the tree bottom-up and set the resolved type of every node.
    ///
    /// Children are analyzed before their parent; the first failure aborts
    /// the walk and is returned unchanged. On failure the tree may be
    /// partially typed and should be discarded. Analyzing an unchanged tree
    /// again yields the same types.
    pub fn analyze(&mut self, analyzer: &Analyzer) -> AnalysisResult<()> {
        self.analyze_at_depth(analyzer, 1)
    }

    /// Analyze `exprs` in order, stopping at the first failure.
    pub fn analyze_list(exprs: &mut [Expr], analyzer: &Analyzer) -> AnalysisResult<()> {
        let total = exprs.len();
        for (i, expr) in exprs.iter_mut().enumerate() {
            if let Err(err) = expr.analyze(analyzer) {
                log::debug!("Analysis failed at expression {} of {}: {}", i + 1, total, err);
                return Err(err);
            }
        }
        Ok(())
    }

    fn analyze_at_depth(&mut self, analyzer: &Analyzer, depth: usize) -> AnalysisResult<()> {
        let options = analyzer.options();
        if depth > options.max_expr_depth {
            return Err(AnalysisError::ExprDepthLimit {
                limit: options.max_expr_depth,
            });
        }
        if self.children.len() > options.max_expr_children {
            return Err(AnalysisError::ExprChildrenLimit {
                limit: options.max_expr_children,
                actual: self.children.len(),
            });
        }

        for child in &mut self.children {
            child.analyze_at_depth(analyzer, depth + 1)?;
        }

        self.ty = self.resolve_type(analyzer)?;
        log::trace!("Analyzed {} as {}", self.to_sql(), self.ty);
        Ok(())
    }

    /// Node-local rule; children are already analyzed.
    fn resolve_type(&self, analyzer: &Analyzer) -> AnalysisResult<PrimitiveType> {
        match &self.kind {
            ExprKind::SlotRef(slot_ref) => {
                let slot = analyzer.descriptors().get_slot(slot_ref.slot_id()).ok_or(
                    AnalysisError::UnknownSlot {
                        slot_id: slot_ref.slot_id(),
                    },
                )?;
                if !slot.ty().is_valid() {
                    return Err(AnalysisError::UnresolvedSlotType {
                        slot_id: slot_ref.slot_id(),
                    });
                }
                Ok(slot.ty())
            }

            ExprKind::Literal(value) => Ok(value.ty()),

            ExprKind::Arithmetic(op) => {
                let (left, right) = (self.child_ty(0), self.child_ty(1));
                op.output_type(left, right)
                    .ok_or_else(|| AnalysisError::InvalidOperandTypes {
                        operator: op.as_str().to_string(),
                        left,
                        right: Some(right),
                    })
            }

            ExprKind::BinaryPredicate(op) => {
                let (left, right) = (self.child_ty(0), self.child_ty(1));
                op.output_type(left, right)
                    .ok_or_else(|| self.incompatible(left, right))
            }

            ExprKind::CompoundPredicate(op) => {
                for child in &self.children {
                    if !op.accepts(child.ty) {
                        return Err(AnalysisError::NonBooleanOperand {
                            operator: op.as_str().to_string(),
                            actual: child.ty,
                        });
                    }
                }
                debug_assert_eq!(self.children.len(), op.arity());
                Ok(PrimitiveType::Boolean)
            }

            ExprKind::IsNullPredicate { .. } => Ok(PrimitiveType::Boolean),

            ExprKind::LikePredicate(op) => {
                let (left, right) = (self.child_ty(0), self.child_ty(1));
                op.output_type(left, right)
                    .ok_or_else(|| AnalysisError::InvalidOperandTypes {
                        operator: op.as_str().to_string(),
                        left,
                        right: Some(right),
                    })
            }

            ExprKind::InPredicate { .. } | ExprKind::BetweenPredicate { .. } => {
                let compared = self.child_ty(0);
                for other in self.children.iter().skip(1) {
                    if !PrimitiveType::assignment_compatible(compared, other.ty).is_valid() {
                        return Err(self.incompatible(compared, other.ty));
                    }
                }
                Ok(PrimitiveType::Boolean)
            }

            ExprKind::Cast { target } => {
                let from = self.child_ty(0);
                if from.is_castable_to(*target) {
                    Ok(*target)
                } else {
                    Err(AnalysisError::InvalidCast { from, to: *target })
                }
            }

            ExprKind::FunctionCall { name } => {
                let arg_types: Vec<PrimitiveType> = self.children.iter().map(|c| c.ty).collect();
                analyzer
                    .functions()
                    .resolve(name, &arg_types)
                    .ok_or_else(|| AnalysisError::UnknownFunction {
                        name: name.clone(),
                        arg_types,
                    })
            }

            ExprKind::Aggregate { op, .. } => {
                if let Some(arg) = self.children.first() {
                    if arg.contains(ExprClass::Aggregate) {
                        return Err(AnalysisError::NestedAggregate {
                            expression: self.to_sql(),
                        });
                    }
                }
                let arg_type = self.children.first().map(|c| c.ty);
                op.output_type(arg_type)
                    .ok_or_else(|| AnalysisError::InvalidAggregateArgument {
                        function: op.as_str().to_string(),
                        arg_type: arg_type.unwrap_or(PrimitiveType::Invalid),
                    })
            }
        }
    }

    fn child_ty(&self, index: usize) -> PrimitiveType {
        self.children
            .get(index)
            .map(|c| c.ty)
            .unwrap_or(PrimitiveType::Invalid)
    }

    fn incompatible(&self, left: PrimitiveType, right: PrimitiveType) -> AnalysisError {
        AnalysisError::IncompatibleTypes {
            expression: self.to_sql(),
            left,
            right,
        }
    }
}
