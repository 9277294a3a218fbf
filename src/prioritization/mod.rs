//! Backlog prioritization rules and rule engine.
//!
//! Orders work items before PI planning. The product-owner ordering
//! (most urgent first, larger items first within a priority) is
//! available as [`prioritize_backlog`].
//!
//! # Usage
//!
//! ```
//! use u_pi_planning::models::WorkItem;
//! use u_pi_planning::prioritization::{rules, RuleEngine};
//!
//! let mut backlog = vec![
//!     WorkItem::feature("F1", 3).with_priority(2),
//!     WorkItem::feature("F2", 8).with_priority(1),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_tie_breaker(rules::SmallestEffort);
//! engine.sort(&mut backlog);
//! assert_eq!(backlog[0].id, "F2");
//! ```

mod engine;
pub mod rules;

pub use engine::{EvaluationMode, RuleEngine, TieBreaker};

use crate::models::WorkItem;
use std::fmt::Debug;

/// Score returned by a prioritization rule.
///
/// Lower scores = earlier in the backlog.
pub type RuleScore = f64;

/// A rule that ranks backlog items.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// items that should be planned first.
pub trait PrioritizationRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "WSJF").
    fn name(&self) -> &'static str;

    /// Scores an item; lower = earlier.
    fn evaluate(&self, item: &WorkItem) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Sorts the backlog in product-owner order: ascending priority value,
/// then descending effort. Stable for full ties.
pub fn prioritize_backlog(items: &mut [WorkItem]) {
    RuleEngine::product_owner().sort(items);
}
