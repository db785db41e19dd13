use common::{recent_goals, Goal, GoalStatistics};
use yew::prelude::*;

use super::completion::CompletionCard;
use super::empty_state::EmptyState;
use super::recent_goals::RecentGoals;
use super::stats::StatsGrid;
use crate::api_client::goal::{list_goals, LOAD_GOALS_ERROR};
use crate::common::fetch_hook::use_focus_fetch;
use crate::common::loading::Loading;
use crate::hooks::FetchState;
use crate::session::{greeting, SessionContext};

/// Lower half of the dashboard: recent goals, or the call to action when
/// there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalsSection {
    Recent,
    Empty,
}

impl GoalsSection {
    pub fn for_statistics(stats: &GoalStatistics) -> Self {
        if stats.is_empty() {
            GoalsSection::Empty
        } else {
            GoalsSection::Recent
        }
    }
}

/// Goals to render, or `None` while a request is in flight and content stays
/// hidden. A failed first load leaves nothing behind and reads as empty.
fn visible_goals(state: &FetchState<Vec<Goal>>) -> Option<Vec<Goal>> {
    if state.is_loading() {
        return None;
    }
    Some(state.data().cloned().unwrap_or_default())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_context::<SessionContext>();
    let (goals_state, _refetch) = use_focus_fetch(list_goals, LOAD_GOALS_ERROR);

    let Some(goals) = visible_goals(&goals_state) else {
        return html! { <Loading text={"Loading your goals...".to_string()} /> };
    };
    let stats = GoalStatistics::from_goals(&goals);
    let display_name = session.as_ref().and_then(|ctx| ctx.session.display_name());

    html! {
        <>
            <div class="mb-6">
                <h2 class="text-2xl font-bold">{greeting(display_name)}</h2>
                <p class="text-sm text-base-content/70">{"Here's how your career goals are going."}</p>
            </div>

            <StatsGrid stats={stats} />
            <CompletionCard completion_rate={stats.completion_rate} />

            {match GoalsSection::for_statistics(&stats) {
                GoalsSection::Recent => html! {
                    <RecentGoals goals={recent_goals(&goals).to_vec()} />
                },
                GoalsSection::Empty => html! { <EmptyState /> },
            }}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::GoalListResponse;

    fn goals_from(json: &str) -> Vec<Goal> {
        let response: GoalListResponse = serde_json::from_str(json).expect("Should parse goals");
        response.goals
    }

    #[test]
    fn test_first_render_hides_content_until_loaded() {
        let state = FetchState::<Vec<Goal>>::pending();

        assert_eq!(visible_goals(&state), None);
    }

    #[test]
    fn test_loaded_empty_list_shows_empty_state() {
        let state = FetchState {
            data: Some(Vec::new()),
            loading: false,
            error: None,
        };

        let goals = visible_goals(&state).expect("Loaded state should render");
        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(GoalsSection::for_statistics(&stats), GoalsSection::Empty);
    }

    #[test]
    fn test_failed_first_load_reads_as_empty() {
        let state = FetchState::<Vec<Goal>> {
            data: None,
            loading: false,
            error: Some("HTTP error 502: no error details".to_string()),
        };

        assert_eq!(visible_goals(&state), Some(Vec::new()));
    }

    #[test]
    fn test_failure_message_is_generic() {
        assert_eq!(LOAD_GOALS_ERROR, "Failed to load goals");
    }

    #[test]
    fn test_empty_response_shows_empty_state() {
        let goals = goals_from(r#"{"goals": []}"#);
        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(GoalsSection::for_statistics(&stats), GoalsSection::Empty);
    }

    #[test]
    fn test_five_goals_scenario() {
        let goals = goals_from(
            r#"{"goals": [
                {"id": 1, "title": "Ship the API", "status": "completed", "progress": 100},
                {"id": 2, "title": "Get certified", "status": "completed", "progress": 100},
                {"id": 3, "title": "Lead a project", "status": "in_progress", "progress": 50},
                {"id": 4, "title": "Learn Go", "status": "not_started", "progress": 0},
                {"id": 5, "title": "Write a blog post", "status": "not_started", "progress": 0}
            ]}"#,
        );
        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.not_started, 2);
        assert_eq!(stats.completion_rate, 40);
        assert_eq!(GoalsSection::for_statistics(&stats), GoalsSection::Recent);

        let recent: Vec<i32> = recent_goals(&goals).iter().map(|g| g.id).collect();
        assert_eq!(recent, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_goal_shows_recent_section() {
        let goals = goals_from(r#"{"goals": [{"id": 9, "title": "Mentor"}]}"#);
        let stats = GoalStatistics::from_goals(&goals);

        assert_eq!(GoalsSection::for_statistics(&stats), GoalsSection::Recent);
        assert_eq!(recent_goals(&goals).len(), 1);
    }
}
