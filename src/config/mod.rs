// Sub-modules
mod core;
mod defaults;
mod loader;
pub mod validation;

// Re-export core types
pub use self::core::{AirdropConfig, DisplayConfig};
pub use defaults::{default_projects, DEFAULT_CONFIG_TOML};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
