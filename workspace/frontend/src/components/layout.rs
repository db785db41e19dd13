pub mod layout;
mod navbar;
mod sidebar;
