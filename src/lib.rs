//! Program Increment simulation for the U-Engine ecosystem.
//!
//! Simulates capacity-constrained work planning for several teams sharing
//! a dependency-linked backlog: greedy first-fit assignment, sprint-by-sprint
//! velocity consumption with carryover, and delivery metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WorkItem`, `Team`, `Dependency`,
//!   `ProgressRecord`, `SprintRound`
//! - **`dependency`**: Dependency extraction from backlog metadata
//! - **`prioritization`**: Backlog ordering rules and rule engine
//! - **`planning`**: First-fit assignment of Features to teams
//! - **`execution`**: Sprint rounds with jittered velocity and carryover
//! - **`standup`**: Blocker collection
//! - **`metrics`**: Delivery ratios and recommendations
//! - **`simulation`**: End-to-end PI driver
//! - **`validation`**: Input integrity checks (duplicate IDs, DAG cycles)
//! - **`config`**: TOML-loadable run parameters
//!
//! # Flow
//!
//! ```text
//! backlog + teams → dependencies → planning → N × (standup, sprint) → metrics → recommendations
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events; install a subscriber in the host application
//! to see them.
//!
//! # References
//!
//! - Leffingwell (2018), "SAFe 4.5 Reference Guide"
//! - Johnson (1974), "Fast algorithms for bin packing"

pub mod config;
pub mod dependency;
pub mod error;
pub mod execution;
pub mod metrics;
pub mod models;
pub mod planning;
pub mod prioritization;
pub mod simulation;
pub mod standup;
pub mod validation;

pub use error::{PlanningError, Result};
