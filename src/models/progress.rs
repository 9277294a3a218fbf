//! Progress records emitted by sprint rounds.
//!
//! A record is a per-team snapshot taken at the end of a round. Records
//! are immutable once emitted and are the only input to the metrics engine.

use serde::{Deserialize, Serialize};

use super::WorkItem;

/// One team's delivery snapshot at the end of a sprint round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Team name.
    pub team: String,
    /// Assigned items in `Completed` status (newly or previously).
    pub completed_count: usize,
    /// Assigned items not yet completed.
    pub remaining_count: usize,
    /// Summed estimate of the completed items.
    pub completed_effort: u32,
}

/// All records emitted by one sprint round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintRound {
    /// Round number (1-based).
    pub number: u32,
    /// One record per team, in team registration order.
    pub records: Vec<ProgressRecord>,
}

impl ProgressRecord {
    /// Snapshots the items assigned to `team`.
    ///
    /// Items owned by other teams are ignored.
    pub fn snapshot(team: &str, items: &[WorkItem]) -> Self {
        let mut record = Self {
            team: team.to_string(),
            completed_count: 0,
            remaining_count: 0,
            completed_effort: 0,
        };
        for item in items.iter().filter(|i| i.is_assigned_to(team)) {
            if item.is_completed() {
                record.completed_count += 1;
                record.completed_effort += item.estimated_effort;
            } else {
                record.remaining_count += 1;
            }
        }
        record
    }

    /// Total items owned by the team.
    pub fn total_count(&self) -> usize {
        self.completed_count + self.remaining_count
    }

    /// Whether every owned item is completed.
    pub fn is_done(&self) -> bool {
        self.remaining_count == 0
    }
}

impl SprintRound {
    /// Finds the record for a team.
    pub fn record_for(&self, team: &str) -> Option<&ProgressRecord> {
        self.records.iter().find(|r| r.team == team)
    }
}
