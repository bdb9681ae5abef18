//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for airdrop-manager operations.
///
/// The valuation core never produces these; they come from the surfaces
/// around it (configuration, edit routing, command parsing).
#[derive(Debug, Error)]
pub enum Error {
    /// Edit or lookup addressed a project id that is not in the table
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// Edit addressed a field that does not exist
    #[error("Unknown field: {0} (expected points, expenses, fdv, airdrop_percent or total_points)")]
    UnknownField(String),

    /// Malformed session command or `--set` assignment
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every issue found while validating a project table
    #[error("Invalid configuration{}:\n  {}", path_suffix(.path), .issues.join("\n  "))]
    ConfigIssues {
        path: Option<PathBuf>,
        issues: Vec<String>,
    },

    /// TOML decoding errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
