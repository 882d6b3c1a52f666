pub mod footer;
pub mod loading;
pub mod navbar;
pub mod ui;
