//! Analysis context.
//!
//! An [`Analyzer`] is handed by reference to [`Expr::analyze`] and threaded
//! unchanged through the recursion. It only exposes what expression analysis
//! needs:
//!
//! - the query's [`DescriptorTable`], to type slot references
//! - a [`FunctionResolver`], to type scalar function calls
//! - [`AnalyzerOptions`], the structural limits enforced during analysis

pub mod functions;
pub mod options;

pub use functions::{BuiltinFunctions, FunctionResolver};
pub use options::AnalyzerOptions;

use crate::descriptor::{DescriptorTable, SlotDescriptor};
use crate::expr::{AnalysisError, AnalysisResult, Expr};

static BUILTIN_FUNCTIONS: BuiltinFunctions = BuiltinFunctions;

/// Read-only context for analyzing the expressions of one query
pub struct Analyzer<'a> {
    descriptors: &'a DescriptorTable,
    functions: &'a dyn FunctionResolver,
    options: AnalyzerOptions,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer over `descriptors` using the builtin functions and
    /// default options
    pub fn new(descriptors: &'a DescriptorTable) -> Self {
        Self {
            descriptors,
            functions: &BUILTIN_FUNCTIONS,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_functions(mut self, functions: &'a dyn FunctionResolver) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn descriptors(&self) -> &'a DescriptorTable {
        self.descriptors
    }

    pub fn functions(&self) -> &'a dyn FunctionResolver {
        self.functions
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Resolve a (possibly qualified) column name to a slot reference.
    ///
    /// An unqualified name must match a column of exactly one registered
    /// table reference.
    pub fn resolve_column(&self, qualifier: Option<&str>, column: &str) -> AnalysisResult<Expr> {
        match qualifier {
            Some(qualifier) => {
                if self.descriptors.find_tuple(qualifier).is_none() {
                    return Err(AnalysisError::UnknownTable {
                        name: qualifier.to_string(),
                    });
                }
                self.descriptors
                    .find_slot(qualifier, column)
                    .map(Expr::slot_ref)
                    .ok_or_else(|| AnalysisError::UnknownColumn {
                        name: format!("{}.{}", qualifier, column),
                    })
            }
            None => {
                let mut matches = self
                    .descriptors
                    .tuples()
                    .flat_map(|t| self.descriptors.tuple_slots(t.id()))
                    .filter(|slot| column_matches(slot, column));

                let Some(slot) = matches.next() else {
                    return Err(AnalysisError::UnknownColumn {
                        name: column.to_string(),
                    });
                };
                if matches.next().is_some() {
                    return Err(AnalysisError::AmbiguousColumn {
                        name: column.to_string(),
                    });
                }
                Ok(Expr::slot_ref(slot))
            }
        }
    }
}

fn column_matches(slot: &SlotDescriptor, column: &str) -> bool {
    slot.column()
        .is_some_and(|c| c.name().eq_ignore_ascii_case(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::PrimitiveType;
    use anyhow::Result;

    fn setup() -> Result<DescriptorTable> {
        let mut catalog = Catalog::new();
        let users = catalog.create_table(
            "users",
            &[("id", PrimitiveType::Int), ("name", PrimitiveType::String)],
        )?;
        let orders = catalog.create_table(
            "orders",
            &[("id", PrimitiveType::BigInt), ("amount", PrimitiveType::Double)],
        )?;

        let mut descs = DescriptorTable::new();
        descs.register_table_ref(users, Some("u"))?;
        descs.register_table_ref(orders, None)?;
        Ok(descs)
    }

    #[test]
    fn test_resolve_qualified_column() -> Result<()> {
        let descs = setup()?;
        let analyzer = Analyzer::new(&descs);

        let expr = analyzer.resolve_column(Some("u"), "ID")?;
        let slot_ref = expr.as_slot_ref().unwrap();
        assert_eq!(slot_ref.label(), Some("u.id"));
        assert_eq!(expr.to_sql(), "u.id");

        let expr = analyzer.resolve_column(Some("orders"), "id")?;
        assert_eq!(expr.to_sql(), "orders.id");
        Ok(())
    }

    #[test]
    fn test_resolve_unqualified_column() -> Result<()> {
        let descs = setup()?;
        let analyzer = Analyzer::new(&descs);

        assert_eq!(analyzer.resolve_column(None, "amount")?.to_sql(), "orders.amount");
        assert!(matches!(
            analyzer.resolve_column(None, "id"),
            Err(AnalysisError::AmbiguousColumn { .. })
        ));
        assert!(matches!(
            analyzer.resolve_column(None, "missing"),
            Err(AnalysisError::UnknownColumn { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_resolve_unknown_table() -> Result<()> {
        let descs = setup()?;
        let analyzer = Analyzer::new(&descs);

        // The alias hides the table name
        assert_eq!(
            analyzer.resolve_column(Some("users"), "id"),
            Err(AnalysisError::UnknownTable {
                name: "users".to_string()
            })
        );
        assert!(matches!(
            analyzer.resolve_column(Some("u"), "amount"),
            Err(AnalysisError::UnknownColumn { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_with_options() -> Result<()> {
        let descs = setup()?;
        let options = AnalyzerOptions {
            max_expr_depth: 3,
            ..Default::default()
        };
        let analyzer = Analyzer::new(&descs).with_options(options.clone());
        assert_eq!(analyzer.options(), &options);
        assert_eq!(analyzer.descriptors().scope(), descs.scope());
        Ok(())
    }
}
