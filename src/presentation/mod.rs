// Presentation layer - View binding, terminal front end and commands
pub mod app_state;
pub mod handlers;
pub mod memory_view;
pub mod terminal_view;
pub mod view;
