//! Rule engine for multi-criteria backlog ordering.
//!
//! Composes multiple prioritization rules with configurable evaluation
//! modes and tie-breaking strategies.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, PrioritizationRule};
use crate::models::WorkItem;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep backlog order (stable sort).
    #[default]
    BacklogOrder,
    /// Deterministic by item ID (lexicographic).
    ById,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PrioritizationRule>,
    weight: f64,
}

/// A composable rule engine for backlog prioritization.
///
/// # Example
/// ```
/// use u_pi_planning::prioritization::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::LargestEffort);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, backlog order is kept.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::BacklogOrder,
            epsilon: 1e-9,
        }
    }

    /// Product-owner ordering: priority, then largest effort.
    pub fn product_owner() -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::LargestEffort)
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: PrioritizationRule + 'static>(self, rule: R) -> Self {
        self.push_rule(rule, 1.0)
    }

    /// Adds a rule whose score is scaled by `weight` in weighted mode.
    pub fn with_weighted_rule<R: PrioritizationRule + 'static>(self, rule: R, weight: f64) -> Self {
        self.push_rule(rule, weight)
    }

    /// Adds a rule consulted only when earlier rules tie. Contributes
    /// nothing to weighted scores.
    pub fn with_tie_breaker<R: PrioritizationRule + 'static>(self, rule: R) -> Self {
        self.push_rule(rule, 0.0)
    }

    fn push_rule<R: PrioritizationRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Returns indices into `items`, highest priority first.
    pub fn sort_indices(&self, items: &[WorkItem]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices.sort_by(|&a, &b| self.compare_sequential(&items[a], &items[b]));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = items.iter().map(|i| self.weighted_score(i)).collect();
                indices.sort_by(|&a, &b| {
                    scores[a]
                        .partial_cmp(&scores[b])
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| self.final_tie(&items[a], &items[b]))
                });
            }
        }

        indices
    }

    /// Reorders `items` in place, highest priority first.
    pub fn sort(&self, items: &mut [WorkItem]) {
        let order = self.sort_indices(items);
        let sorted: Vec<WorkItem> = order.iter().map(|&i| items[i].clone()).collect();
        for (slot, item) in items.iter_mut().zip(sorted) {
            *slot = item;
        }
    }

    fn compare_sequential(&self, a: &WorkItem, b: &WorkItem) -> Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a);
            let score_b = wr.rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        self.final_tie(a, b)
    }

    fn final_tie(&self, a: &WorkItem, b: &WorkItem) -> Ordering {
        match &self.tie_breaker {
            TieBreaker::BacklogOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    fn weighted_score(&self, item: &WorkItem) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(item) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prioritization::rules;

    fn make_item(id: &str, effort: u32, priority: i32) -> WorkItem {
        WorkItem::feature(id, effort).with_priority(priority)
    }

    #[test]
    fn test_smallest_effort_ordering() {
        let items = vec![
            make_item("long", 13, 0),
            make_item("short", 2, 0),
            make_item("medium", 5, 0),
        ];
        let engine = RuleEngine::new().with_rule(rules::SmallestEffort);

        let indices = engine.sort_indices(&items);
        assert_eq!(items[indices[0]].id, "short");
        assert_eq!(items[indices[1]].id, "medium");
        assert_eq!(items[indices[2]].id, "long");
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let items = vec![make_item("A", 3, 1), make_item("B", 8, 1)];
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::LargestEffort);

        let indices = engine.sort_indices(&items);
        // Priority ties → largest effort first
        assert_eq!(items[indices[0]].id, "B");
    }

    #[test]
    fn test_weighted_mode() {
        let items = vec![make_item("A", 1, 10), make_item("B", 8, 1)];
        let engine = RuleEngine::new()
            .with_mode(EvaluationMode::Weighted)
            .with_weighted_rule(rules::Priority, 1.0)
            .with_weighted_rule(rules::SmallestEffort, 0.5);

        // A: 10 + 0.5 = 10.5, B: 1 + 4 = 5
        let indices = engine.sort_indices(&items);
        assert_eq!(items[indices[0]].id, "B");
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let items = vec![make_item("B", 5, 0), make_item("A", 5, 0)];
        let engine = RuleEngine::new()
            .with_rule(rules::SmallestEffort)
            .with_final_tie_breaker(TieBreaker::ById);

        let indices = engine.sort_indices(&items);
        assert_eq!(items[indices[0]].id, "A");
    }

    #[test]
    fn test_no_rules_keeps_order() {
        let mut items = vec![make_item("Z", 1, 9), make_item("A", 9, 1)];
        RuleEngine::new().sort(&mut items);
        assert_eq!(items[0].id, "Z");
    }

    #[test]
    fn test_empty_items() {
        let engine = RuleEngine::product_owner();
        assert!(engine.sort_indices(&[]).is_empty());
        let mut items: Vec<WorkItem> = Vec::new();
        engine.sort(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn test_tie_breaker_ignored_in_weighted_mode() {
        let items = vec![make_item("A", 2, 1), make_item("B", 9, 1)];
        let engine = RuleEngine::new()
            .with_mode(EvaluationMode::Weighted)
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::LargestEffort);

        // Equal weighted scores: backlog order survives
        assert_eq!(engine.sort_indices(&items), vec![0, 1]);
    }
}
