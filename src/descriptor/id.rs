//! Query-scoped identifiers for tuples and slots.
//!
//! Every [`DescriptorTable`](crate::descriptor::DescriptorTable) draws a fresh
//! [`ScopeId`] generation when it is created. Tuple and slot identifiers carry
//! that generation next to their index, so an identifier handed out for one
//! query never compares equal to one from another query even when the indices
//! collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SCOPE_ID: AtomicU32 = AtomicU32::new(1);

/// Generation number of one query's descriptor scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Allocates the next scope generation. Thread-safe.
    pub fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the inner generation number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Identifies one table instance within a query scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TupleId {
    scope: ScopeId,
    index: u32,
}

impl TupleId {
    pub(crate) fn new(scope: ScopeId, index: u32) -> Self {
        Self { scope, index }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Returns the stable index within the owning scope.
    pub fn value(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for TupleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// Identifies one slot (output column of a tuple) within a query scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId {
    scope: ScopeId,
    index: u32,
}

impl SlotId {
    pub(crate) fn new(scope: ScopeId, index: u32) -> Self {
        Self { scope, index }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Returns the stable index within the owning scope.
    pub fn value(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}
