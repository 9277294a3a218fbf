//! Dependency extraction.
//!
//! Derives the precedence relation from each item's `depends_on` list.
//! The relation is a directed multigraph: duplicates and cycles are
//! passed through unchanged, and referenced ids are not checked here.

use std::collections::HashSet;

use crate::error::PlanningError;
use crate::models::{Dependency, WorkItem};

/// Lazily yields one `(item, depends_on)` pair per declared dependency.
///
/// Pairs follow backlog order, then each item's declaration order.
/// Items with no dependencies yield nothing.
pub fn iter_dependencies(items: &[WorkItem]) -> impl Iterator<Item = Dependency> + '_ {
    items.iter().flat_map(|item| {
        item.depends_on
            .iter()
            .map(move |dep| Dependency::new(&item.id, dep))
    })
}

/// Materializes [`iter_dependencies`].
pub fn extract_dependencies(items: &[WorkItem]) -> Vec<Dependency> {
    iter_dependencies(items).collect()
}

/// Reports every dependency whose target is not in the backlog.
pub fn dangling_dependencies(items: &[WorkItem]) -> Vec<PlanningError> {
    let known: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    iter_dependencies(items)
        .filter(|d| !known.contains(d.depends_on_id.as_str()))
        .map(|d| PlanningError::DanglingDependency {
            item_id: d.item_id,
            missing_id: d.depends_on_id,
        })
        .collect()
}
