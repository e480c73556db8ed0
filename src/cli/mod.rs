//! CLI layer - Command-line interface

pub mod commands;
pub mod interactive;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_count, format_entry_list, format_results};
