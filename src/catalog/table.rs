//! Table definitions.

use crate::catalog::Column;
use crate::types::PrimitiveType;
use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from `(name, type)` pairs. Column positions follow the
    /// order of `columns`; names must be unique (case-insensitive) and typed.
    pub fn new(name: impl Into<String>, columns: &[(&str, PrimitiveType)]) -> Result<Self> {
        let name = name.into();
        let mut defs: Vec<Column> = Vec::with_capacity(columns.len());

        for (position, (column_name, ty)) in columns.iter().enumerate() {
            if !ty.is_valid() || ty.is_null() {
                bail!("Column '{}.{}' has no declared type", name, column_name);
            }
            if defs
                .iter()
                .any(|c| c.name().eq_ignore_ascii_case(column_name))
            {
                bail!("Duplicate column '{}' in table '{}'", column_name, name);
            }
            defs.push(Column::new(*column_name, *ty, position as u32));
        }

        Ok(Self {
            name,
            columns: defs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Case-insensitive column lookup
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}
