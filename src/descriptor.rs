//! Tuple and slot descriptors for one query scope.
//!
//! The [`DescriptorTable`] is the bridge between the catalog and expression
//! trees: it allocates [`TupleId`]s for table instances and [`SlotId`]s for
//! their output columns, and remembers the resolved type of every slot.
//! Expression trees only ever hold the identifiers by value.

pub mod id;
pub mod slot;
pub mod tuple;

pub use id::{ScopeId, SlotId, TupleId};
pub use slot::SlotDescriptor;
pub use tuple::TupleDescriptor;

use crate::catalog::Table;
use anyhow::{bail, Result};
use std::sync::Arc;

/// All descriptors registered while analyzing one query
#[derive(Debug)]
pub struct DescriptorTable {
    scope: ScopeId,
    tuples: Vec<TupleDescriptor>,
    slots: Vec<SlotDescriptor>,
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self {
            scope: ScopeId::next(),
            tuples: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Create an empty tuple descriptor (e.g. for a materialized aggregate
    /// output) and return its id.
    pub fn create_tuple_descriptor(&mut self) -> Result<TupleId> {
        let id = TupleId::new(self.scope, next_index(self.tuples.len(), "tuple")?);
        self.tuples.push(TupleDescriptor::new(id));
        Ok(id)
    }

    /// Add a new, untyped slot to `tuple`.
    pub fn add_slot_descriptor(&mut self, tuple: TupleId) -> Result<SlotId> {
        let Some(index) = self.tuple_index(tuple) else {
            bail!("Tuple {} is not registered in this scope", tuple);
        };

        let id = SlotId::new(self.scope, next_index(self.slots.len(), "slot")?);
        self.slots.push(SlotDescriptor::new(id, tuple));
        self.tuples[index].add_slot(id);
        Ok(id)
    }

    /// Register a table instance referenced by the query: creates a tuple
    /// for it and one slot per column, each bound to its catalog column.
    ///
    /// The reference name (alias, or table name without one) must be unique
    /// within the scope.
    pub fn register_table_ref(&mut self, table: Arc<Table>, alias: Option<&str>) -> Result<TupleId> {
        let reference = alias.unwrap_or(table.name());
        if self.find_tuple(reference).is_some() {
            bail!("Duplicate table alias '{}'", reference);
        }

        let tuple_id = self.create_tuple_descriptor()?;
        let index = tuple_id.value() as usize;
        self.tuples[index].set_table(table.clone());
        if let Some(alias) = alias {
            self.tuples[index].set_alias(alias);
        }

        for column in table.columns() {
            let slot_id = self.add_slot_descriptor(tuple_id)?;
            let slot = &mut self.slots[slot_id.value() as usize];
            slot.set_column(column.clone());
            slot.set_label(format!("{}.{}", reference, column.name()));
        }

        log::debug!(
            "Registered table ref '{}' as tuple {} with {} slots",
            reference,
            tuple_id,
            table.columns().len()
        );
        Ok(tuple_id)
    }

    pub fn get_tuple(&self, id: TupleId) -> Option<&TupleDescriptor> {
        self.tuple_index(id).map(|i| &self.tuples[i])
    }

    pub fn get_slot(&self, id: SlotId) -> Option<&SlotDescriptor> {
        self.slot_index(id).map(|i| &self.slots[i])
    }

    pub fn get_slot_mut(&mut self, id: SlotId) -> Option<&mut SlotDescriptor> {
        self.slot_index(id).map(move |i| &mut self.slots[i])
    }

    /// Find a tuple by alias or table name (case-insensitive)
    pub fn find_tuple(&self, reference: &str) -> Option<&TupleDescriptor> {
        self.tuples.iter().find(|t| {
            t.reference_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(reference))
        })
    }

    /// Find the slot bound to `column` of the tuple referenced as `reference`
    pub fn find_slot(&self, reference: &str, column: &str) -> Option<&SlotDescriptor> {
        let tuple = self.find_tuple(reference)?;
        self.tuple_slots(tuple.id()).into_iter().find(|slot| {
            slot.column()
                .is_some_and(|c| c.name().eq_ignore_ascii_case(column))
        })
    }

    pub fn tuples(&self) -> impl Iterator<Item = &TupleDescriptor> {
        self.tuples.iter()
    }

    /// Slot descriptors of `tuple`, in registration order
    pub fn tuple_slots(&self, tuple: TupleId) -> Vec<&SlotDescriptor> {
        self.get_tuple(tuple)
            .map(|t| t.slots().iter().filter_map(|s| self.get_slot(*s)).collect())
            .unwrap_or_default()
    }

    pub fn debug_string(&self) -> String {
        let mut out = String::from("tuples:");
        for tuple in &self.tuples {
            out.push(' ');
            out.push_str(&tuple.debug_string());
        }
        out.push_str(" slots:");
        for slot in &self.slots {
            out.push(' ');
            out.push_str(&slot.debug_string());
        }
        out
    }

    fn tuple_index(&self, id: TupleId) -> Option<usize> {
        let index = id.value() as usize;
        (id.scope() == self.scope && index < self.tuples.len()).then_some(index)
    }

    fn slot_index(&self, id: SlotId) -> Option<usize> {
        let index = id.value() as usize;
        (id.scope() == self.scope && index < self.slots.len()).then_some(index)
    }
}

/// Index for the next id of a kind. Ids are never reused, so exhausting
/// `u32` is an error.
fn next_index(len: usize, kind: &str) -> Result<u32> {
    match u32::try_from(len) {
        Ok(index) => Ok(index),
        Err(_) => bail!("Too many {} descriptors in one scope ({})", kind, len),
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}
