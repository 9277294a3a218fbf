//! Planning pass over a whole backlog.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::assign;
use crate::config::ExhaustionPolicy;
use crate::dependency::{dangling_dependencies, extract_dependencies};
use crate::error::{PlanningError, Result};
use crate::models::{Dependency, Team, WorkItem};
use crate::prioritization::RuleEngine;

/// An item-to-team placement made during planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned item.
    pub item_id: String,
    /// Owning team.
    pub team: String,
    /// Effort charged against the team's capacity.
    pub effort: u32,
}

/// Result of one planning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningOutcome {
    /// Placements in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Features left unassigned under [`ExhaustionPolicy::Defer`].
    pub deferred: Vec<String>,
    /// Dependency relation extracted from the backlog.
    pub dependencies: Vec<Dependency>,
}

impl PlanningOutcome {
    /// Items assigned to a team, in placement order.
    pub fn assignments_for_team(&self, team: &str) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.team == team).collect()
    }

    /// Whether every Feature found a team.
    pub fn is_complete(&self) -> bool {
        self.deferred.is_empty()
    }
}

/// Release-train planner: assigns every unassigned Feature to a team.
///
/// Epics and Stories are never assigned directly. Items that already
/// carry a team are left as they are, so assignment happens at most once.
///
/// # Example
///
/// ```
/// use u_pi_planning::models::{Team, WorkItem};
/// use u_pi_planning::planning::PiPlanner;
///
/// let mut items = vec![WorkItem::feature("F1", 8), WorkItem::feature("F2", 25)];
/// let mut teams = vec![Team::new("Team A", 30, 10), Team::new("Team B", 25, 12)];
///
/// let outcome = PiPlanner::new().plan(&mut items, &mut teams).unwrap();
/// assert_eq!(outcome.assignments.len(), 2);
/// assert_eq!(items[1].assigned_team.as_deref(), Some("Team B"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PiPlanner {
    policy: ExhaustionPolicy,
    rule_engine: Option<RuleEngine>,
}

impl PiPlanner {
    /// Creates a planner that aborts on the first unplaceable Feature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity-exhaustion policy.
    pub fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets a rule engine for Feature ordering.
    ///
    /// When set, Features are placed in rule-engine order instead of
    /// backlog order. The backlog itself is not reordered.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// Runs one planning pass.
    ///
    /// # Errors
    /// With [`ExhaustionPolicy::Abort`], returns the first
    /// `CapacityExhausted`. Assignments made before the failure remain
    /// applied to `items` and `teams`.
    pub fn plan(&self, items: &mut [WorkItem], teams: &mut [Team]) -> Result<PlanningOutcome> {
        let mut outcome = PlanningOutcome::default();

        for idx in self.feature_order(items) {
            let item = &mut items[idx];
            match assign(item, teams) {
                Ok(team_idx) => outcome.assignments.push(Assignment {
                    item_id: item.id.clone(),
                    team: teams[team_idx].name.clone(),
                    effort: item.effort_remaining,
                }),
                Err(err) => match self.policy {
                    ExhaustionPolicy::Abort => {
                        warn!(item = %item.id, "planning aborted: {err}");
                        return Err(err);
                    }
                    ExhaustionPolicy::Defer => {
                        warn!(item = %item.id, "deferred: {err}");
                        outcome.deferred.push(item.id.clone());
                    }
                },
            }
        }

        outcome.dependencies = extract_dependencies(items);
        for dangling in dangling_dependencies(items) {
            if let PlanningError::DanglingDependency { item_id, missing_id } = &dangling {
                warn!(item = %item_id, missing = %missing_id, "{dangling}");
            }
        }

        info!(
            assigned = outcome.assignments.len(),
            deferred = outcome.deferred.len(),
            dependencies = outcome.dependencies.len(),
            "PI planning complete"
        );
        Ok(outcome)
    }

    /// Indices of unassigned Features in placement order.
    fn feature_order(&self, items: &[WorkItem]) -> Vec<usize> {
        let order = match &self.rule_engine {
            Some(engine) => engine.sort_indices(items),
            None => (0..items.len()).collect(),
        };
        order
            .into_iter()
            .filter(|&i| items[i].is_feature() && items[i].assigned_team.is_none())
            .collect()
    }
}
