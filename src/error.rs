//! Error types for planning, execution, and metrics.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlanningError>;

/// Errors raised by the Program Increment engines.
///
/// No error is retried: the engines are deterministic given their inputs
/// and jitter seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// No team has enough remaining capacity for the item.
    #[error("no team has capacity for item '{item_id}' (effort {effort})")]
    CapacityExhausted {
        /// Item that could not be placed.
        item_id: String,
        /// Effort the item required.
        effort: u32,
    },

    /// Metrics were requested for a team whose capacity basis is zero.
    #[error("team '{team}' has zero capacity; delivery ratio is undefined")]
    InvalidTeamState {
        /// Offending team.
        team: String,
    },

    /// A dependency references an item that is not in the backlog.
    ///
    /// Reported, never fatal: sequencing is advisory.
    #[error("item '{item_id}' depends on unknown item '{missing_id}'")]
    DanglingDependency {
        /// Item declaring the dependency.
        item_id: String,
        /// Referenced id that does not exist.
        missing_id: String,
    },

    /// Backlog or team input failed validation.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Simulation configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PlanningError {
    /// Whether the pipeline should stop on this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DanglingDependency { .. })
    }
}
