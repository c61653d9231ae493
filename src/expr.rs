//! Scalar expression trees.
//!
//! This module provides:
//! - [`Expr`], the tree node, and its variants ([`ExprKind`])
//! - post-order semantic analysis against an [`Analyzer`](crate::analyzer::Analyzer)
//! - deep copy and rewriting through a [`SubstitutionMap`]
//! - tree searches and binding checks against tuple ids
//! - SQL and debug rendering, and [`ExprKey`] for hash-keyed lookup

mod analyze;
mod display;
mod rewrite;
mod search;

pub mod error;
pub mod key;
pub mod literal;
pub mod node;
pub mod operator;
pub mod order_by;
pub mod substitution;

pub use error::{AnalysisError, AnalysisResult};
pub use key::ExprKey;
pub use literal::LiteralValue;
pub use node::{Expr, ExprClass, ExprKind, SlotRef};
pub use operator::{AggregateOp, ArithmeticOp, BinaryOp, CompoundOp, LikeOp};
pub use order_by::OrderByElement;
pub use substitution::SubstitutionMap;
