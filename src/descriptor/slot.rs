//! Slot descriptors.

use crate::catalog::Column;
use crate::descriptor::{SlotId, TupleId};
use crate::types::PrimitiveType;

/// Binds one query-scope slot to its resolved type and, for base-table
/// slots, to the catalog column it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDescriptor {
    id: SlotId,
    parent: TupleId,
    ty: PrimitiveType,
    /// Underlying column, absent for computed slots
    column: Option<Column>,
    label: Option<String>,
}

impl SlotDescriptor {
    pub(crate) fn new(id: SlotId, parent: TupleId) -> Self {
        Self {
            id,
            parent,
            ty: PrimitiveType::Invalid,
            column: None,
            label: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Tuple this slot belongs to
    pub fn parent(&self) -> TupleId {
        self.parent
    }

    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    pub fn set_type(&mut self, ty: PrimitiveType) {
        self.ty = ty;
    }

    pub fn column(&self) -> Option<&Column> {
        self.column.as_ref()
    }

    /// Attach the underlying column. The slot's type always follows the
    /// column's declared type.
    pub fn set_column(&mut self, column: Column) {
        self.ty = column.ty();
        self.column = Some(column);
    }

    /// Display name used when rendering slot references
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn debug_string(&self) -> String {
        let col = self.column.as_ref().map(|c| c.name()).unwrap_or("null");
        let ty = if self.ty.is_valid() {
            self.ty.as_str()
        } else {
            "null"
        };
        format!("[slot_id={} col={} type={}]", self.id, col, ty)
    }
}
