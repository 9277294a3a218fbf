//! Single-item first-fit assignment.

use tracing::debug;

use crate::error::{PlanningError, Result};
use crate::models::{Team, WorkItem};

/// Assigns `item` to the first team (registration order) whose remaining
/// capacity covers `item.effort_remaining`.
///
/// On success the team's capacity is decremented, `item.assigned_team`
/// is set, and the chosen team's index is returned.
///
/// # Errors
/// `CapacityExhausted` if no team can absorb the item. Neither the item
/// nor any team is modified in that case.
pub fn assign(item: &mut WorkItem, teams: &mut [Team]) -> Result<usize> {
    let effort = item.effort_remaining;

    let Some(index) = teams.iter().position(|t| t.can_absorb(effort)) else {
        return Err(PlanningError::CapacityExhausted {
            item_id: item.id.clone(),
            effort,
        });
    };

    let team = &mut teams[index];
    team.capacity -= effort;
    item.assigned_team = Some(team.name.clone());

    debug!(
        item = %item.id,
        team = %team.name,
        effort,
        capacity_left = team.capacity,
        "assigned item"
    );

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit() {
        let mut teams = vec![Team::new("A", 30, 10), Team::new("B", 25, 10)];
        let mut item = WorkItem::feature("F1", 8);

        let idx = assign(&mut item, &mut teams).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(item.assigned_team.as_deref(), Some("A"));
        assert_eq!(teams[0].capacity, 22);
        assert_eq!(teams[1].capacity, 25);
    }

    #[test]
    fn test_skips_teams_without_room() {
        let mut teams = vec![Team::new("A", 5, 10), Team::new("B", 25, 10)];
        let mut item = WorkItem::feature("F1", 20);

        let idx = assign(&mut item, &mut teams).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(teams[0].capacity, 5);
        assert_eq!(teams[1].capacity, 5);
    }

    #[test]
    fn test_exact_fit() {
        let mut teams = vec![Team::new("A", 8, 10)];
        let mut item = WorkItem::feature("F1", 8);

        assign(&mut item, &mut teams).unwrap();
        assert_eq!(teams[0].capacity, 0);
    }

    #[test]
    fn test_capacity_exhausted_leaves_state_untouched() {
        let mut teams = vec![Team::new("A", 22, 10)];
        let mut item = WorkItem::feature("F2", 25);

        let err = assign(&mut item, &mut teams).unwrap_err();
        assert_eq!(
            err,
            PlanningError::CapacityExhausted {
                item_id: "F2".into(),
                effort: 25,
            }
        );
        assert!(item.assigned_team.is_none());
        assert_eq!(teams[0].capacity, 22);
    }

    #[test]
    fn test_no_teams() {
        let mut item = WorkItem::feature("F1", 0);
        assert!(assign(&mut item, &mut []).is_err());
    }
}
