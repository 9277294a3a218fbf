//! Team model.
//!
//! Teams are the resources of a Program Increment. Each team has two
//! independent budgets:
//! - **capacity**: total effort it may accept during planning, consumed
//!   once per PI by assignment.
//! - **velocity**: effort it can burn per sprint round, replenished
//!   every round.

use serde::{Deserialize, Serialize};

/// An agile team on the release train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team name.
    pub name: String,
    /// Remaining planning budget. Decremented only by assignment.
    pub capacity: u32,
    /// Planning budget the team started the PI with.
    pub initial_capacity: u32,
    /// Nominal effort consumed per sprint round.
    pub velocity: u32,
    /// Team members in roster order.
    pub members: Vec<Member>,
}

/// A team member, optionally reporting a blocker at standup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member identifier.
    pub name: String,
    /// Impediment raised by this member, if any.
    pub blocker: Option<String>,
}

impl Team {
    /// Creates a team with the given planning capacity and velocity.
    pub fn new(name: impl Into<String>, capacity: u32, velocity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            initial_capacity: capacity,
            velocity,
            members: Vec::new(),
        }
    }

    /// Adds an unblocked member.
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.members.push(Member::new(name));
        self
    }

    /// Adds a member reporting a blocker.
    pub fn with_blocked_member(
        mut self,
        name: impl Into<String>,
        blocker: impl Into<String>,
    ) -> Self {
        self.members.push(Member::new(name).with_blocker(blocker));
        self
    }

    /// Whether the remaining capacity can absorb `effort`.
    #[inline]
    pub fn can_absorb(&self, effort: u32) -> bool {
        self.capacity >= effort
    }

    /// Capacity already committed by assignment.
    pub fn allocated(&self) -> u32 {
        self.initial_capacity.saturating_sub(self.capacity)
    }

    /// Committed fraction of the initial capacity (0.0..1.0).
    ///
    /// Returns 0.0 for a team that started with no capacity.
    pub fn utilization(&self) -> f64 {
        if self.initial_capacity == 0 {
            return 0.0;
        }
        self.allocated() as f64 / self.initial_capacity as f64
    }
}

impl Member {
    /// Creates an unblocked member.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocker: None,
        }
    }

    /// Flags the member as blocked.
    pub fn with_blocker(mut self, blocker: impl Into<String>) -> Self {
        self.blocker = Some(blocker.into());
        self
    }

    /// Whether the member reports a blocker.
    pub fn is_blocked(&self) -> bool {
        self.blocker.is_some()
    }
}
