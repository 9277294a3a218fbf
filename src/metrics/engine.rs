//! Metrics evaluation and recommendation policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::config::{
    CapacityBasis, ProgressUnit, SimulationConfig, DEFAULT_UNDERPERFORMANCE_THRESHOLD,
};
use crate::error::{PlanningError, Result};
use crate::models::{ProgressRecord, Team};

/// Delivery performance of one team over a set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetric {
    /// Team name.
    pub team: String,
    /// Summed progress in the configured unit.
    pub delivered: f64,
    /// Capacity used as denominator.
    pub capacity: u32,
    /// `delivered / capacity`.
    pub velocity_ratio: f64,
}

/// A capacity-increase advisory for an underperforming team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Flagged team.
    pub team: String,
    /// Ratio that triggered the advisory.
    pub velocity_ratio: f64,
    /// Advisory text.
    pub message: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl TeamMetric {
    /// Whether the ratio is strictly below `threshold`.
    pub fn is_underperforming(&self, threshold: f64) -> bool {
        self.velocity_ratio < threshold
    }
}

/// Evaluates delivery ratios and emits recommendations.
///
/// # Example
///
/// ```
/// use u_pi_planning::metrics::MetricsEngine;
/// use u_pi_planning::models::{ProgressRecord, Team};
///
/// let teams = vec![Team::new("Team A", 4, 10)];
/// let records = vec![ProgressRecord {
///     team: "Team A".into(),
///     completed_count: 2,
///     remaining_count: 2,
///     completed_effort: 9,
/// }];
///
/// let engine = MetricsEngine::new();
/// let metrics = engine.evaluate(&teams, &records).unwrap();
/// assert!((metrics[0].velocity_ratio - 0.5).abs() < 1e-10);
/// assert_eq!(engine.recommend(&metrics).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsEngine {
    threshold: f64,
    unit: ProgressUnit,
    basis: CapacityBasis,
}

impl MetricsEngine {
    /// Creates an engine with the default threshold, item-count progress,
    /// and remaining-capacity denominator.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_UNDERPERFORMANCE_THRESHOLD,
            unit: ProgressUnit::Items,
            basis: CapacityBasis::Remaining,
        }
    }

    /// Creates an engine from a simulation configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            threshold: config.underperformance_threshold,
            unit: config.progress_unit,
            basis: config.ratio_basis,
        }
    }

    /// Sets the underperformance threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the progress unit.
    pub fn with_unit(mut self, unit: ProgressUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the capacity denominator.
    pub fn with_basis(mut self, basis: CapacityBasis) -> Self {
        self.basis = basis;
        self
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Computes one metric per team, in team order.
    ///
    /// Progress is summed over every record whose `team` matches.
    ///
    /// # Errors
    /// `InvalidTeamState` for the first team whose capacity basis is zero.
    pub fn evaluate(&self, teams: &[Team], records: &[ProgressRecord]) -> Result<Vec<TeamMetric>> {
        teams
            .iter()
            .map(|team| {
                let capacity = match self.basis {
                    CapacityBasis::Remaining => team.capacity,
                    CapacityBasis::Initial => team.initial_capacity,
                };
                if capacity == 0 {
                    return Err(PlanningError::InvalidTeamState {
                        team: team.name.clone(),
                    });
                }

                let delivered: f64 = records
                    .iter()
                    .filter(|r| r.team == team.name)
                    .map(|r| match self.unit {
                        ProgressUnit::Items => r.completed_count as f64,
                        ProgressUnit::Effort => f64::from(r.completed_effort),
                    })
                    .sum();

                Ok(TeamMetric {
                    team: team.name.clone(),
                    delivered,
                    capacity,
                    velocity_ratio: delivered / f64::from(capacity),
                })
            })
            .collect()
    }

    /// Emits an advisory for every metric below the threshold.
    pub fn recommend(&self, metrics: &[TeamMetric]) -> Vec<Recommendation> {
        metrics
            .iter()
            .filter(|m| m.is_underperforming(self.threshold))
            .map(|m| {
                let rec = Recommendation {
                    team: m.team.clone(),
                    velocity_ratio: m.velocity_ratio,
                    message: format!("Increase capacity for team {}", m.team),
                };
                info!(team = %m.team, ratio = m.velocity_ratio, "{rec}");
                rec
            })
            .collect()
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}
