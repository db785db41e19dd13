//! Common transport-layer types shared between the goal service and the frontend.
//! The structs mirror the goal service's response payloads so the frontend can
//! deserialize them directly, and the statistics helpers stay free of any
//! browser dependency so they can be tested natively.

mod goal;
mod statistics;

pub use goal::{Goal, GoalListResponse, GoalStatus};
pub use statistics::{completion_rate, recent_goals, GoalStatistics, RECENT_GOALS_LIMIT};
