//! Analyzer configuration.

use serde::{Deserialize, Serialize};

/// Structural limits enforced while analyzing expression trees.
///
/// Missing fields take their defaults when deserialized, so the options can
/// be embedded in a host's configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Maximum nesting depth of an expression tree (the root is depth 1)
    pub max_expr_depth: usize,
    /// Maximum number of children of a single node
    pub max_expr_children: usize,
}

impl AnalyzerOptions {
    pub const DEFAULT_MAX_EXPR_DEPTH: usize = 1000;
    pub const DEFAULT_MAX_EXPR_CHILDREN: usize = 10000;
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_expr_depth: Self::DEFAULT_MAX_EXPR_DEPTH,
            max_expr_children: Self::DEFAULT_MAX_EXPR_CHILDREN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalyzerOptions::default();
        assert_eq!(options.max_expr_depth, 1000);
        assert_eq!(options.max_expr_children, 10000);
    }

    #[test]
    fn test_partial_config() -> serde_json::Result<()> {
        let options: AnalyzerOptions = serde_json::from_str(r#"{"max_expr_depth": 8}"#)?;
        assert_eq!(options.max_expr_depth, 8);
        assert_eq!(
            options.max_expr_children,
            AnalyzerOptions::DEFAULT_MAX_EXPR_CHILDREN
        );

        let options: AnalyzerOptions = serde_json::from_str("{}")?;
        assert_eq!(options, AnalyzerOptions::default());
        Ok(())
    }
}
