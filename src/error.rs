//! Error types for jotter

use thiserror::Error;

/// Main error type for the jotter application
#[derive(Debug, Error)]
pub enum JotterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JotterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotterError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: journal\n\
                        Example: jotter config journal my-journal.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            JotterError::Io(e) => {
                format!(
                    "IO error: {}\n\n\
                    Suggestions:\n\
                    • Check that the journal file is writable\n\
                    • Check free disk space\n\
                    • Point jotter at a different file: jotter --file <path> ...",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotterError
pub type Result<T> = std::result::Result<T, JotterError>;
