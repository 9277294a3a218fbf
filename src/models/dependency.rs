//! Dependency relation between backlog items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A directional precedence hint: `item_id` should not be sequenced
/// before `depends_on_id`.
///
/// Derived from [`WorkItem::depends_on`](super::WorkItem) and never stored
/// independently. Advisory only; sprint execution does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependent item.
    pub item_id: String,
    /// Item it waits on.
    pub depends_on_id: String,
}

impl Dependency {
    /// Creates a dependency pair.
    pub fn new(item_id: impl Into<String>, depends_on_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            depends_on_id: depends_on_id.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.item_id, self.depends_on_id)
    }
}
