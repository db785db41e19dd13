mod goal_card;
pub mod status;

pub use goal_card::GoalCard;
pub use status::status_style;
