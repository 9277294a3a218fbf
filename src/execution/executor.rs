//! Round driver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::consume;
use crate::config::SimulationConfig;
use crate::models::{ProgressRecord, SprintRound, Team, WorkItem};

/// Draws a round budget uniformly from `velocity ± jitter`, clamped to the
/// `u32` range.
///
/// With `jitter == 0` the RNG is not touched and `velocity` is returned.
pub fn draw_budget<R: Rng>(velocity: u32, jitter: u32, rng: &mut R) -> u32 {
    if jitter == 0 {
        return velocity;
    }
    let jitter = i64::from(jitter);
    let delta = rng.random_range(-jitter..=jitter);
    (i64::from(velocity) + delta).clamp(0, i64::from(u32::MAX)) as u32
}

/// Runs sprint rounds against a planned backlog.
///
/// Owns the RNG for velocity perturbation, so a seeded executor replays
/// the same budgets across runs.
///
/// # Example
///
/// ```
/// use u_pi_planning::execution::SprintExecutor;
/// use u_pi_planning::models::{Team, WorkItem};
///
/// let teams = vec![Team::new("Team A", 30, 10)];
/// let mut items = vec![WorkItem::feature("F1", 8)];
/// items[0].assigned_team = Some("Team A".into());
///
/// let mut executor = SprintExecutor::new(0, Some(7));
/// let round = executor.execute_sprint(&teams, &mut items);
/// assert_eq!(round.number, 1);
/// assert_eq!(round.records[0].completed_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SprintExecutor {
    jitter: u32,
    rng: StdRng,
    rounds_run: u32,
}

impl SprintExecutor {
    /// Creates an executor. `seed == None` seeds from the OS.
    pub fn new(jitter: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            jitter,
            rng,
            rounds_run: 0,
        }
    }

    /// Creates an executor from the jitter and seed of a configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.velocity_jitter, config.seed)
    }

    /// Rounds executed so far.
    pub fn rounds_run(&self) -> u32 {
        self.rounds_run
    }

    /// Executes one sprint round for every team, in registration order.
    pub fn execute_sprint(&mut self, teams: &[Team], items: &mut [WorkItem]) -> SprintRound {
        self.rounds_run += 1;
        let records: Vec<ProgressRecord> = teams
            .iter()
            .map(|team| self.run_round(team, items))
            .collect();

        let completed: usize = records.iter().map(|r| r.completed_count).sum();
        let remaining: usize = records.iter().map(|r| r.remaining_count).sum();
        info!(
            round = self.rounds_run,
            completed, remaining, "sprint round finished"
        );

        SprintRound {
            number: self.rounds_run,
            records,
        }
    }

    /// Draws a budget for `team` and burns it against the team's items.
    pub fn run_round(&mut self, team: &Team, items: &mut [WorkItem]) -> ProgressRecord {
        let budget = draw_budget(team.velocity, self.jitter, &mut self.rng);
        run_round_with_budget(&team.name, items, budget)
    }
}

/// Burns a fixed `budget` against `team`'s items in backlog order.
///
/// Stops at the first item the budget cannot finish. Owned items with
/// no effort left are still completed after that point.
pub(crate) fn run_round_with_budget(
    team: &str,
    items: &mut [WorkItem],
    budget: u32,
) -> ProgressRecord {
    let mut budget = budget;
    let mut stalled = false;

    for item in items
        .iter_mut()
        .filter(|i| i.is_assigned_to(team) && !i.is_completed())
    {
        if stalled && item.effort_remaining > 0 {
            continue;
        }
        let (next, leftover) = consume(item.clone(), budget);
        debug!(
            team,
            item = %next.id,
            consumed = budget - leftover,
            effort_remaining = next.effort_remaining,
            "consumed effort"
        );
        *item = next;
        budget = leftover;

        if !item.is_completed() {
            stalled = true;
        }
    }

    ProgressRecord::snapshot(team, items)
}
