//! Built-in prioritization rules.
//!
//! # Categories
//!
//! - **Urgency**: PRIORITY
//! - **Effort-based**: SMALLEST, LARGEST
//! - **Economic**: WSJF
//!
//! # Score Convention
//! All rules return lower scores for items planned first.
//!
//! # References
//! - Reinertsen (2009), "The Principles of Product Development Flow", Ch. 3 (WSJF)
//! - Smith (1956), weighted shortest processing time

use super::{PrioritizationRule, RuleScore};
use crate::models::WorkItem;

/// Urgency rank.
///
/// Lower `priority` values are planned first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl PrioritizationRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        item.priority as f64
    }

    fn description(&self) -> &'static str {
        "Item Priority"
    }
}

/// Smallest remaining effort first.
///
/// Maximizes the number of items finished early in the increment.
#[derive(Debug, Clone, Copy)]
pub struct SmallestEffort;

impl PrioritizationRule for SmallestEffort {
    fn name(&self) -> &'static str {
        "SMALLEST"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        item.effort_remaining as f64
    }

    fn description(&self) -> &'static str {
        "Smallest Remaining Effort"
    }
}

/// Largest remaining effort first.
///
/// Places big items while capacity is still unfragmented.
#[derive(Debug, Clone, Copy)]
pub struct LargestEffort;

impl PrioritizationRule for LargestEffort {
    fn name(&self) -> &'static str {
        "LARGEST"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        -(item.effort_remaining as f64)
    }

    fn description(&self) -> &'static str {
        "Largest Remaining Effort"
    }
}

/// Weighted Shortest Job First.
///
/// Cost of delay is approximated from urgency:
/// `weight = 1000 / (max(priority, 0) + 1)`. Score is `-(weight / effort)`.
/// Zero-effort items come first.
#[derive(Debug, Clone, Copy)]
pub struct Wsjf;

impl PrioritizationRule for Wsjf {
    fn name(&self) -> &'static str {
        "WSJF"
    }

    fn evaluate(&self, item: &WorkItem) -> RuleScore {
        let effort = item.effort_remaining as f64;
        if effort <= 0.0 {
            return f64::MIN;
        }
        let weight = 1000.0 / (item.priority.max(0) as f64 + 1.0);
        -(weight / effort)
    }

    fn description(&self) -> &'static str {
        "Weighted Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(effort: u32, priority: i32) -> WorkItem {
        WorkItem::feature("F", effort).with_priority(priority)
    }

    #[test]
    fn test_priority() {
        let urgent = make_item(5, 1);
        let later = make_item(5, 4);
        assert!(Priority.evaluate(&urgent) < Priority.evaluate(&later));
    }

    #[test]
    fn test_smallest_effort() {
        assert!(SmallestEffort.evaluate(&make_item(2, 0)) < SmallestEffort.evaluate(&make_item(9, 0)));
    }

    #[test]
    fn test_largest_effort() {
        assert!(LargestEffort.evaluate(&make_item(9, 0)) < LargestEffort.evaluate(&make_item(2, 0)));
    }

    #[test]
    fn test_wsjf() {
        // Same urgency: shorter job first
        assert!(Wsjf.evaluate(&make_item(2, 1)) < Wsjf.evaluate(&make_item(8, 1)));
        // Same effort: more urgent first
        assert!(Wsjf.evaluate(&make_item(5, 0)) < Wsjf.evaluate(&make_item(5, 3)));
    }

    #[test]
    fn test_wsjf_zero_effort_first() {
        assert_eq!(Wsjf.evaluate(&make_item(0, 9)), f64::MIN);
    }

    #[test]
    fn test_wsjf_negative_priority_clamped() {
        let score = Wsjf.evaluate(&make_item(10, -3));
        assert!((score - (-100.0)).abs() < 1e-10);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Priority.name(), "PRIORITY");
        assert_eq!(Wsjf.description(), "Weighted Shortest Job First");
    }
}
