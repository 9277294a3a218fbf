//! Step function for consuming a budget against one item.

use crate::models::{ItemStatus, WorkItem};

/// Applies `budget` effort units to `item`.
///
/// Returns the updated item and the unused budget:
/// - already completed: unchanged, full budget returned
/// - `effort_remaining <= budget`: completed, leftover = budget - effort
/// - otherwise: effort reduced by the whole budget, leftover = 0
///
/// A zero budget leaves an unfinished item's status untouched.
pub fn consume(mut item: WorkItem, budget: u32) -> (WorkItem, u32) {
    if item.is_completed() {
        return (item, budget);
    }

    if item.effort_remaining <= budget {
        let leftover = budget - item.effort_remaining;
        item.effort_remaining = 0;
        item.status = ItemStatus::Completed;
        (item, leftover)
    } else {
        item.effort_remaining -= budget;
        if budget > 0 {
            item.status = ItemStatus::InProgress;
        }
        (item, 0)
    }
}
