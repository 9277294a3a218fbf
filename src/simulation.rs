//! Program Increment driver.
//!
//! Wires the engines in their fixed order:
//!
//! 1. validate (optional)
//! 2. plan: first-fit assignment and dependency extraction
//! 3. for each sprint round: standup, then execution
//! 4. evaluate metrics over every emitted record
//! 5. recommend
//!
//! The run is single-threaded and synchronous; nothing here performs I/O.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::{PlanningError, Result};
use crate::execution::SprintExecutor;
use crate::metrics::{MetricsEngine, Recommendation, TeamMetric};
use crate::models::{Dependency, ProgressRecord, SprintRound, Team, WorkItem};
use crate::planning::{Assignment, PiPlanner};
use crate::prioritization::RuleEngine;
use crate::standup::{run_daily_standup, Blocker};
use crate::validation::{validate_input, ValidationErrorKind};

/// Structured output of one Program Increment, for downstream presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiReport {
    /// Dependency relation extracted from the backlog.
    pub dependencies: Vec<Dependency>,
    /// Placements made during planning.
    pub assignments: Vec<Assignment>,
    /// Features left unassigned (defer policy only).
    pub deferred: Vec<String>,
    /// Blockers raised at each round's standup.
    pub blockers: Vec<Blocker>,
    /// Records emitted by each sprint round.
    pub rounds: Vec<SprintRound>,
    /// Per-team delivery metrics.
    pub metrics: Vec<TeamMetric>,
    /// Capacity-increase advisories.
    pub recommendations: Vec<Recommendation>,
}

impl PiReport {
    /// Every record from every round, in emission order.
    pub fn all_records(&self) -> Vec<ProgressRecord> {
        self.rounds
            .iter()
            .flat_map(|r| r.records.iter().cloned())
            .collect()
    }

    /// Records of the final round.
    pub fn final_round(&self) -> Option<&SprintRound> {
        self.rounds.last()
    }
}

/// One Program Increment run over a backlog and team roster.
///
/// # Example
///
/// ```
/// use u_pi_planning::config::{CapacityBasis, SimulationConfig};
/// use u_pi_planning::models::{Team, WorkItem};
/// use u_pi_planning::simulation::ProgramIncrement;
///
/// let mut items = vec![WorkItem::feature("F1", 8), WorkItem::feature("F2", 25)];
/// let mut teams = vec![Team::new("Team A", 30, 10), Team::new("Team B", 25, 10)];
///
/// let config = SimulationConfig::deterministic()
///     .with_rounds(3)
///     .with_ratio_basis(CapacityBasis::Initial);
/// let report = ProgramIncrement::new(config).run(&mut items, &mut teams).unwrap();
///
/// assert_eq!(report.rounds.len(), 3);
/// assert!(items.iter().all(|i| i.is_completed()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgramIncrement {
    config: SimulationConfig,
    rule_engine: Option<RuleEngine>,
}

impl ProgramIncrement {
    /// Creates a run with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            rule_engine: None,
        }
    }

    /// Orders Features by `engine` during planning.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = Some(engine);
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs planning, every sprint round, and inspect-and-adapt.
    ///
    /// `items` and `teams` are mutated in place and stay visible to the
    /// caller even when an error is returned.
    ///
    /// # Errors
    /// - `Validation` if the validation stage is enabled and fails
    /// - `CapacityExhausted` under the abort policy
    /// - `InvalidTeamState` if a team's capacity basis is zero at evaluation
    pub fn run(&self, items: &mut [WorkItem], teams: &mut [Team]) -> Result<PiReport> {
        info!(
            items = items.len(),
            teams = teams.len(),
            rounds = self.config.sprint_rounds,
            "starting program increment"
        );

        if self.config.validate_backlog {
            // Dangling references are reported by planning, never fatal
            if let Err(errors) = validate_input(items, teams) {
                let fatal: Vec<String> = errors
                    .iter()
                    .filter(|e| e.kind != ValidationErrorKind::DanglingDependency)
                    .map(|e| e.to_string())
                    .collect();
                if !fatal.is_empty() {
                    return Err(PlanningError::Validation(fatal.join("; ")));
                }
            }
        }

        let mut planner = PiPlanner::new().with_policy(self.config.on_capacity_exhausted);
        if let Some(engine) = &self.rule_engine {
            planner = planner.with_rule_engine(engine.clone());
        }
        let outcome = planner.plan(items, teams)?;

        let mut executor = SprintExecutor::from_config(&self.config);
        let mut blockers = Vec::new();
        let mut rounds = Vec::with_capacity(self.config.sprint_rounds as usize);
        for _ in 0..self.config.sprint_rounds {
            blockers.extend(run_daily_standup(teams));
            rounds.push(executor.execute_sprint(teams, items));
        }

        let mut report = PiReport {
            dependencies: outcome.dependencies,
            assignments: outcome.assignments,
            deferred: outcome.deferred,
            blockers,
            rounds,
            metrics: Vec::new(),
            recommendations: Vec::new(),
        };

        let engine = MetricsEngine::from_config(&self.config);
        report.metrics = engine.evaluate(teams, &report.all_records())?;
        report.recommendations = engine.recommend(&report.metrics);

        info!(
            completed = items.iter().filter(|i| i.is_completed()).count(),
            recommendations = report.recommendations.len(),
            "program increment finished"
        );
        Ok(report)
    }
}
