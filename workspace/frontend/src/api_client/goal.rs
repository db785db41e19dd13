use crate::api_client::{self, ApiError};
use common::{Goal, GoalListResponse};

/// User-facing message for any failure of the goal list request.
pub const LOAD_GOALS_ERROR: &str = "Failed to load goals";

/// List the goals of the current caller, in the order the service returns them.
pub async fn list_goals() -> Result<Vec<Goal>, ApiError> {
    log::trace!("Fetching goals for current user");
    let result = api_client::get::<GoalListResponse>("/goals").await;

    match result {
        Ok(response) => {
            log::info!("Successfully fetched {} goals", response.goals.len());
            Ok(response.goals)
        }
        Err(e) => {
            log::error!("Failed to fetch goals: {}", e);
            Err(e)
        }
    }
}

/// Resolve a single goal from the caller's goal list.
pub async fn find_goal(goal_id: i32) -> Result<Option<Goal>, ApiError> {
    log::trace!("Resolving goal ID: {}", goal_id);
    let goals = list_goals().await?;
    Ok(goals.into_iter().find(|goal| goal.id == goal_id))
}
