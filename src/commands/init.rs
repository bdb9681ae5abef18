use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub(crate) fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(config_path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
