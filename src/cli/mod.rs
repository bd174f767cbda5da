pub mod commands;
pub mod menu;

pub use commands::{Cli, Commands, display_command, run, search_command};
pub use menu::run_menu;
