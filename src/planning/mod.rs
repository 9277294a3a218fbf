//! PI planning: greedy first-fit assignment of Features to teams.
//!
//! # Algorithm
//!
//! For each Feature (backlog order, or rule-engine order if configured),
//! scan teams in registration order and pick the first whose remaining
//! capacity covers the Feature's effort.
//!
//! This is first-fit, not optimal bin-packing: no reordering or
//! backtracking is attempted, so capacity may fragment. A min-heap keyed
//! on remaining capacity would generalize the same contract for large
//! team counts.
//!
//! # Complexity
//! O(n * t) where n = Features, t = teams.
//!
//! # Reference
//! Johnson (1974), "Fast algorithms for bin packing" (First Fit)

mod assignment;
mod planner;

pub use assignment::assign;
pub use planner::{Assignment, PiPlanner, PlanningOutcome};
