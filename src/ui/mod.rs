pub mod bubbles;
pub mod command;
pub mod report;
pub mod stats;
pub mod terminal;
pub mod theme;
pub mod view;

pub use bubbles::{layout_rows, render_bubbles};
pub use command::{command_to_app_event, parse_command, Command};
pub use report::format_report;
pub use terminal::TuiManager;
