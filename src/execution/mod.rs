//! Sprint execution: per-round velocity consumption with carryover.
//!
//! Each round, every team draws a budget around its nominal velocity and
//! burns it against its own assigned items in backlog order. Work is
//! strictly sequential within a team: the first item the budget cannot
//! finish absorbs the rest of the budget and ends the team's round.
//!
//! Teams touch only their own items, so the order in which teams are
//! processed does not change the result.

mod consume;
mod executor;

pub use consume::consume;
pub use executor::{draw_budget, SprintExecutor};
