//! Daily standup: blocker collection across teams.
//!
//! Each team's members are polled in roster order; every member carrying
//! a blocker flag yields one [`Blocker`]. Blockers are reported to the
//! caller and logged; they do not alter velocity or capacity.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Team;

/// An impediment raised at standup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    /// Team the member belongs to.
    pub team: String,
    /// Reporting member.
    pub member: String,
    /// Impediment description.
    pub description: String,
}

/// Collects blockers from every team, in team then member order.
pub fn run_daily_standup(teams: &[Team]) -> Vec<Blocker> {
    let blockers: Vec<Blocker> = teams
        .iter()
        .flat_map(|team| {
            team.members.iter().filter_map(move |m| {
                m.blocker.as_ref().map(|b| Blocker {
                    team: team.name.clone(),
                    member: m.name.clone(),
                    description: b.clone(),
                })
            })
        })
        .collect();

    for b in &blockers {
        warn!(team = %b.team, member = %b.member, "blocker escalated: {}", b.description);
    }
    blockers
}

/// Groups blocker counts by team, in first-seen order.
pub fn blockers_by_team(blockers: &[Blocker]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for b in blockers {
        match counts.iter().position(|(team, _)| *team == b.team) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((b.team.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("Team A", 30, 10)
                .with_member("Alice")
                .with_blocked_member("Bob", "staging env down"),
            Team::new("Team B", 25, 12)
                .with_blocked_member("Charlie", "awaiting design review")
                .with_blocked_member("Eve", "flaky CI"),
        ]
    }

    #[test]
    fn test_collects_flagged_members_in_order() {
        let blockers = run_daily_standup(&teams());
        assert_eq!(blockers.len(), 3);
        assert_eq!(
            blockers[0],
            Blocker {
                team: "Team A".into(),
                member: "Bob".into(),
                description: "staging env down".into(),
            }
        );
        assert_eq!(blockers[1].member, "Charlie");
        assert_eq!(blockers[2].member, "Eve");
    }

    #[test]
    fn test_no_blockers() {
        let teams = vec![Team::new("Team A", 30, 10).with_member("Alice")];
        assert!(run_daily_standup(&teams).is_empty());
    }

    #[test]
    fn test_group_by_team() {
        let counts = blockers_by_team(&run_daily_standup(&teams()));
        assert_eq!(
            counts,
            vec![("Team A".to_string(), 1), ("Team B".to_string(), 2)]
        );
    }
}
