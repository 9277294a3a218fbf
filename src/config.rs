//! Simulation configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```
//! use u_pi_planning::config::{ExhaustionPolicy, SimulationConfig};
//!
//! let config = SimulationConfig::from_toml_str(
//!     r#"
//!     velocity_jitter = 0
//!     sprint_rounds = 5
//!     on_capacity_exhausted = "defer"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.sprint_rounds, 5);
//! assert_eq!(config.on_capacity_exhausted, ExhaustionPolicy::Defer);
//! assert!((config.underperformance_threshold - 0.75).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, Result};

/// Ratio below which a capacity-increase recommendation is emitted.
pub const DEFAULT_UNDERPERFORMANCE_THRESHOLD: f64 = 0.75;

/// Default half-width of the velocity perturbation.
pub const DEFAULT_VELOCITY_JITTER: u32 = 2;

/// What PI planning does when no team can absorb a Feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Stop the pass and return `CapacityExhausted`. Earlier assignments stay applied.
    #[default]
    Abort,
    /// Leave the item unassigned and continue with the next Feature.
    Defer,
}

/// Unit summed from progress records when computing delivery ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressUnit {
    /// Completed item count.
    #[default]
    Items,
    /// Completed effort (summed estimates).
    Effort,
}

/// Team capacity used as the ratio denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBasis {
    /// Capacity left after planning.
    #[default]
    Remaining,
    /// Capacity the team started the PI with.
    Initial,
}

/// Parameters for one Program Increment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delivery ratio below which a team is flagged.
    pub underperformance_threshold: f64,
    /// Per-round budget is drawn uniformly from `velocity ± velocity_jitter`.
    pub velocity_jitter: u32,
    /// RNG seed for the velocity draw. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Sprint rounds executed per PI.
    pub sprint_rounds: u32,
    /// Planning behavior on `CapacityExhausted`.
    pub on_capacity_exhausted: ExhaustionPolicy,
    /// Unit summed by the metrics engine.
    pub progress_unit: ProgressUnit,
    /// Denominator of the delivery ratio.
    pub ratio_basis: CapacityBasis,
    /// Run input validation (including cycle detection) before planning.
    pub validate_backlog: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            underperformance_threshold: DEFAULT_UNDERPERFORMANCE_THRESHOLD,
            velocity_jitter: DEFAULT_VELOCITY_JITTER,
            seed: None,
            sprint_rounds: 1,
            on_capacity_exhausted: ExhaustionPolicy::Abort,
            progress_unit: ProgressUnit::Items,
            ratio_basis: CapacityBasis::Remaining,
            validate_backlog: false,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PlanningError::Config(e.to_string()))
    }

    /// A jitter-free, seeded configuration for reproducible runs.
    pub fn deterministic() -> Self {
        Self {
            velocity_jitter: 0,
            seed: Some(0),
            ..Self::default()
        }
    }

    /// Sets the underperformance threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.underperformance_threshold = threshold;
        self
    }

    /// Sets the velocity jitter half-width.
    pub fn with_jitter(mut self, jitter: u32) -> Self {
        self.velocity_jitter = jitter;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of sprint rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.sprint_rounds = rounds;
        self
    }

    /// Sets the capacity-exhaustion policy.
    pub fn with_exhaustion_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.on_capacity_exhausted = policy;
        self
    }

    /// Sets the progress unit.
    pub fn with_progress_unit(mut self, unit: ProgressUnit) -> Self {
        self.progress_unit = unit;
        self
    }

    /// Sets the ratio denominator.
    pub fn with_ratio_basis(mut self, basis: CapacityBasis) -> Self {
        self.ratio_basis = basis;
        self
    }

    /// Enables the validation stage.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_backlog = enabled;
        self
    }
}
