use serde::{Deserialize, Serialize};

use crate::goal::{Goal, GoalStatus};

/// Number of goals shown in the dashboard's recent list.
pub const RECENT_GOALS_LIMIT: usize = 3;

/// Aggregates derived from the current goal list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GoalStatistics {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Includes goals whose status is unknown to this client.
    pub not_started: usize,
    /// Whole percentage of completed goals, 0 for an empty list.
    pub completion_rate: u32,
}

impl GoalStatistics {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let mut stats = goals.iter().fold(Self::default(), |mut stats, goal| {
            match goal.status {
                GoalStatus::Completed => stats.completed += 1,
                GoalStatus::InProgress => stats.in_progress += 1,
                GoalStatus::NotStarted | GoalStatus::Unknown => stats.not_started += 1,
            }
            stats
        });

        stats.total = goals.len();
        stats.completion_rate = completion_rate(stats.completed, stats.total);
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// `round(completed / total * 100)` with halves rounded up, 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    // Integer form of floor(x + 0.5), exact for any list size.
    let rate = (completed * 200 + total) / (total * 2);
    rate as u32
}

/// The first [`RECENT_GOALS_LIMIT`] goals, in the order the service returned them.
pub fn recent_goals(goals: &[Goal]) -> &[Goal] {
    &goals[..goals.len().min(RECENT_GOALS_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(id: i32, status: GoalStatus) -> Goal {
        Goal {
            id,
            title: format!("Goal {}", id),
            description: None,
            status,
            progress: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_empty_list_has_zero_statistics() {
        let stats = GoalStatistics::from_goals(&[]);

        assert_eq!(stats, GoalStatistics::default());
        assert_eq!(stats.completion_rate, 0);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_mixed_statuses() {
        let goals = vec![
            goal(1, GoalStatus::Completed),
            goal(2, GoalStatus::Completed),
            goal(3, GoalStatus::InProgress),
            goal(4, GoalStatus::NotStarted),
            goal(5, GoalStatus::NotStarted),
        ];

        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.not_started, 2);
        assert_eq!(stats.completion_rate, 40);
    }

    #[test]
    fn test_unknown_status_counts_as_not_started() {
        let goals = vec![
            goal(1, GoalStatus::Unknown),
            goal(2, GoalStatus::Completed),
            goal(3, GoalStatus::InProgress),
        ];

        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(stats.not_started, 1);
        assert_eq!(
            stats.total,
            stats.completed + stats.in_progress + stats.not_started
        );
    }

    #[test]
    fn test_partition_is_exhaustive() {
        let statuses = [
            GoalStatus::Completed,
            GoalStatus::InProgress,
            GoalStatus::NotStarted,
            GoalStatus::Unknown,
        ];

        for len in 0..12 {
            let goals: Vec<Goal> = (0..len)
                .map(|i| goal(i as i32, statuses[(i * 7 + len) % statuses.len()]))
                .collect();
            let stats = GoalStatistics::from_goals(&goals);

            assert_eq!(stats.total, goals.len());
            assert_eq!(
                stats.total,
                stats.completed + stats.in_progress + stats.not_started
            );
        }
    }

    #[test]
    fn test_completion_rate_rounding() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(0, 4), 0);
        assert_eq!(completion_rate(4, 4), 100);
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        // 12.5 rounds up
        assert_eq!(completion_rate(1, 8), 13);
        // 0.5 rounds up
        assert_eq!(completion_rate(1, 200), 1);
        assert_eq!(completion_rate(1, 201), 0);
    }

    #[test]
    fn test_recent_goals_takes_first_three_in_order() {
        let goals: Vec<Goal> = [5, 3, 9, 1, 4]
            .iter()
            .map(|id| goal(*id, GoalStatus::NotStarted))
            .collect();

        let ids: Vec<i32> = recent_goals(&goals).iter().map(|g| g.id).collect();

        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_recent_goals_short_list() {
        let goals = vec![goal(1, GoalStatus::Completed), goal(2, GoalStatus::InProgress)];

        assert_eq!(recent_goals(&goals).len(), 2);
        assert!(recent_goals(&[]).is_empty());
    }
}
