//! Tuple descriptors.

use crate::catalog::Table;
use crate::descriptor::{SlotId, TupleId};
use std::sync::Arc;

/// Groups the slots of one table instance (base table reference or
/// materialized intermediate result).
#[derive(Debug, Clone, PartialEq)]
pub struct TupleDescriptor {
    id: TupleId,
    table: Option<Arc<Table>>,
    alias: Option<String>,
    slots: Vec<SlotId>,
}

impl TupleDescriptor {
    pub(crate) fn new(id: TupleId) -> Self {
        Self {
            id,
            table: None,
            alias: None,
            slots: Vec::new(),
        }
    }

    pub fn id(&self) -> TupleId {
        self.id
    }

    pub fn table(&self) -> Option<&Arc<Table>> {
        self.table.as_ref()
    }

    pub(crate) fn set_table(&mut self, table: Arc<Table>) {
        self.table = Some(table);
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub(crate) fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// Name this tuple is referenced by in the query: the alias if there is
    /// one, otherwise the table name.
    pub fn reference_name(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .or_else(|| self.table.as_ref().map(|t| t.name()))
    }

    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    pub(crate) fn add_slot(&mut self, slot: SlotId) {
        self.slots.push(slot);
    }

    pub fn debug_string(&self) -> String {
        let tbl = self.table.as_ref().map(|t| t.name()).unwrap_or("null");
        let slots: Vec<String> = self.slots.iter().map(|s| s.to_string()).collect();
        match &self.alias {
            Some(alias) => format!(
                "[tuple_id={} tbl={} alias={} slots=[{}]]",
                self.id,
                tbl,
                alias,
                slots.join(", ")
            ),
            None => format!(
                "[tuple_id={} tbl={} slots=[{}]]",
                self.id,
                tbl,
                slots.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ScopeId;
    use crate::types::PrimitiveType;

    #[test]
    fn test_reference_name() -> anyhow::Result<()> {
        let scope = ScopeId::next();
        let mut desc = TupleDescriptor::new(TupleId::new(scope, 0));
        assert_eq!(desc.reference_name(), None);

        desc.set_table(Arc::new(Table::new("users", &[("id", PrimitiveType::Int)])?));
        assert_eq!(desc.reference_name(), Some("users"));

        desc.set_alias("u");
        assert_eq!(desc.reference_name(), Some("u"));
        Ok(())
    }

    #[test]
    fn test_debug_string() {
        let scope = ScopeId::next();
        let mut desc = TupleDescriptor::new(TupleId::new(scope, 2));
        assert_eq!(desc.debug_string(), "[tuple_id=2 tbl=null slots=[]]");

        desc.add_slot(SlotId::new(scope, 4));
        desc.add_slot(SlotId::new(scope, 5));
        desc.set_alias("x");
        assert_eq!(
            desc.debug_string(),
            "[tuple_id=2 tbl=null alias=x slots=[4, 5]]"
        );
    }
}
