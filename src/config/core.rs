use serde::{Deserialize, Serialize};

use crate::core::ProjectDefinition;

use super::defaults::default_projects;

/// Root configuration structure, read from `.airdrop.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirdropConfig {
    /// Tracked projects; the built-in table when omitted
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectDefinition>,

    /// Display configuration for output formatting
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            display: None,
        }
    }
}

impl AirdropConfig {
    pub fn project(&self, id: &str) -> Option<&ProjectDefinition> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.display
            .as_ref()
            .and_then(|d| d.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.use_color)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// `terminal` or `json`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
