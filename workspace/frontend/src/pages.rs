pub mod goal_detail;
pub mod goals;
