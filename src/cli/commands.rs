//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Personal journal kept in a single JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file to use (overrides JOTTER_JOURNAL and jotter.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new journal entry
    Add {
        /// Title of the entry (prompted when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Body of the entry (prompted when omitted)
        #[arg(short, long)]
        content: Option<String>,

        /// Comma-separated tags (prompted when omitted)
        #[arg(long)]
        tags: Option<String>,
    },

    /// List all journal entries
    List,

    /// Count total journal entries
    Count,

    /// Search entries by free text
    Search {
        /// Search query (prompted when omitted)
        query: Option<String>,
    },

    /// Filter entries by tag
    Tag {
        /// Tag to filter by (prompted when omitted)
        tag: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
