//! In-memory catalog of table and column definitions.
//!
//! The catalog is owned by the surrounding system; the analysis layer only
//! reads [`Table`] and [`Column`] definitions from it when registering table
//! references and binding slot descriptors.

pub mod column;
pub mod table;

pub use column::Column;
pub use table::Table;

use crate::types::PrimitiveType;
use anyhow::{bail, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed collection of table definitions
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<String, Arc<Table>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new table. Table names are case-insensitive.
    pub fn create_table(
        &mut self,
        name: &str,
        columns: &[(&str, PrimitiveType)],
    ) -> Result<Arc<Table>> {
        let key = name.to_lowercase();
        if self.tables.contains_key(&key) {
            bail!("Table '{}' already exists", name);
        }

        let table = Arc::new(Table::new(name, columns)?);
        self.tables.insert(key, table.clone());
        log::debug!("Created table '{}' with {} columns", name, columns.len());
        Ok(table)
    }

    pub fn get_table(&self, name: &str) -> Option<Arc<Table>> {
        self.tables.get(&name.to_lowercase()).cloned()
    }

    /// List tables ordered by name
    pub fn list_tables(&self) -> Vec<Arc<Table>> {
        let mut tables: Vec<_> = self.tables.values().cloned().collect();
        tables.sort_by(|a, b| a.name().cmp(b.name()));
        tables
    }
}
