//! Column definitions.

use crate::types::PrimitiveType;
use serde::{Deserialize, Serialize};

/// A column of a catalog table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    ty: PrimitiveType,
    position: u32,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: PrimitiveType, position: u32) -> Self {
        Self {
            name: name.into(),
            ty,
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    /// 0-based ordinal within the owning table
    pub fn position(&self) -> u32 {
        self.position
    }
}
