pub mod dashboard;
pub mod goals;
pub mod layout;
