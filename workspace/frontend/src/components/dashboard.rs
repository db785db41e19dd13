mod completion;
mod empty_state;
mod recent_goals;
mod stats;
mod view;

pub use view::Dashboard;
