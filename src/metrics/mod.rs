//! Delivery metrics and improvement recommendations (Inspect & Adapt).
//!
//! Computes a per-team delivery ratio from progress records and flags
//! teams whose ratio falls below a threshold.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Delivered | Sum of the configured progress unit over the team's records |
//! | Velocity ratio | Delivered / capacity basis |
//!
//! The engine reads only the records it is given, never live backlog state.

mod engine;

pub use engine::{MetricsEngine, Recommendation, TeamMetric};
