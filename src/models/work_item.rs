//! Work item (backlog entry) model.
//!
//! A work item is a unit of backlog work with an effort estimate,
//! an urgency rank, and optional precedence hints on other items.
//!
//! # Lifecycle
//! 1. Created by an external generator with `NotStarted` status.
//! 2. PI planning sets `assigned_team` (Features only, exactly once).
//! 3. Sprint rounds decrement `effort_remaining` and flip `status`.
//!
//! Items are never deleted during a run.

use serde::{Deserialize, Serialize};

/// Backlog item classification.
///
/// Only `Feature` items are assigned directly during PI planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Deliverable assigned to a single team for the increment.
    Feature,
    /// Large initiative spanning several features.
    Epic,
    /// Team-level unit of work.
    Story,
}

/// Execution state of a work item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// No effort consumed yet.
    #[default]
    NotStarted,
    /// Partially consumed, carried over to the next round.
    InProgress,
    /// All effort consumed.
    Completed,
}

/// A backlog work item.
///
/// # Invariants
/// - `status == Completed` iff `effort_remaining == 0` and the item is assigned.
/// - `effort_remaining` never increases once assignment begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Item classification.
    pub kind: ItemKind,
    /// Urgency rank (lower = more urgent).
    pub priority: i32,
    /// Original effort estimate. Never mutated.
    pub estimated_effort: u32,
    /// Effort still to be consumed.
    pub effort_remaining: u32,
    /// IDs of items this one depends on.
    pub depends_on: Vec<String>,
    /// Owning team, set once by PI planning.
    pub assigned_team: Option<String>,
    /// Execution state.
    pub status: ItemStatus,
}

impl WorkItem {
    /// Creates a new item with the given effort estimate.
    pub fn new(id: impl Into<String>, kind: ItemKind, effort: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            priority: 0,
            estimated_effort: effort,
            effort_remaining: effort,
            depends_on: Vec::new(),
            assigned_team: None,
            status: ItemStatus::NotStarted,
        }
    }

    /// Creates a Feature item.
    pub fn feature(id: impl Into<String>, effort: u32) -> Self {
        Self::new(id, ItemKind::Feature, effort)
    }

    /// Creates an Epic item.
    pub fn epic(id: impl Into<String>, effort: u32) -> Self {
        Self::new(id, ItemKind::Epic, effort)
    }

    /// Creates a Story item.
    pub fn story(id: impl Into<String>, effort: u32) -> Self {
        Self::new(id, ItemKind::Story, effort)
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the urgency rank.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a dependency on another item.
    pub fn with_dependency(mut self, item_id: impl Into<String>) -> Self {
        self.depends_on.push(item_id.into());
        self
    }

    /// Whether this item is a Feature.
    pub fn is_feature(&self) -> bool {
        self.kind == ItemKind::Feature
    }

    /// Whether all effort has been consumed.
    pub fn is_completed(&self) -> bool {
        self.status == ItemStatus::Completed
    }

    /// Whether this item belongs to the given team.
    pub fn is_assigned_to(&self, team: &str) -> bool {
        self.assigned_team.as_deref() == Some(team)
    }

    /// Effort consumed so far.
    pub fn effort_consumed(&self) -> u32 {
        self.estimated_effort.saturating_sub(self.effort_remaining)
    }
}
