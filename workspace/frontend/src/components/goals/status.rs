use common::GoalStatus;

pub const GREEN: &str = "#4CAF50";
pub const ORANGE: &str = "#FF9800";
pub const GRAY: &str = "#9E9E9E";

/// Visual treatment of a goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

const COMPLETED: StatusStyle = StatusStyle {
    color: GREEN,
    icon: "fas fa-check-circle",
    label: "Completed",
};

const IN_PROGRESS: StatusStyle = StatusStyle {
    color: ORANGE,
    icon: "fas fa-clock",
    label: "In Progress",
};

const NOT_STARTED: StatusStyle = StatusStyle {
    color: GRAY,
    icon: "far fa-circle",
    label: "Not Started",
};

pub fn status_style(status: GoalStatus) -> StatusStyle {
    match status {
        GoalStatus::Completed => COMPLETED,
        GoalStatus::InProgress => IN_PROGRESS,
        GoalStatus::NotStarted | GoalStatus::Unknown => NOT_STARTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let completed = status_style(GoalStatus::Completed);
        assert_eq!(completed.color, GREEN);
        assert_eq!(completed.icon, "fas fa-check-circle");

        let in_progress = status_style(GoalStatus::InProgress);
        assert_eq!(in_progress.color, ORANGE);
        assert_eq!(in_progress.icon, "fas fa-clock");

        let not_started = status_style(GoalStatus::NotStarted);
        assert_eq!(not_started.color, GRAY);
        assert_eq!(not_started.icon, "far fa-circle");
    }

    #[test]
    fn test_unknown_status_looks_like_not_started() {
        assert_eq!(
            status_style(GoalStatus::Unknown),
            status_style(GoalStatus::NotStarted)
        );
    }
}
