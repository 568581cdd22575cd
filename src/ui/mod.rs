//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, output formatting, charts and shell completion
//! generation.

pub mod chart;
pub mod cli;
pub mod color;
pub mod completion;
pub mod export;
pub mod output;
pub mod window;

// Re-export commonly used items
pub use chart::ChartSpec;
pub use cli::{Cli, Commands, Mode, cli_to_config};
pub use completion::print_completions;
pub use window::show_chart;
