use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

use super::core::AirdropConfig;
use super::validation::validate_config;

pub const CONFIG_FILE_NAME: &str = ".airdrop.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str, path: Option<&Path>) -> Result<AirdropConfig> {
    let config = toml::from_str::<AirdropConfig>(contents)?;
    validate_config(&config, path)?;
    Ok(config)
}

/// Load a configuration file the user named explicitly.
///
/// Unlike discovery, any failure here is reported to the caller.
pub fn load_config_from(path: &Path) -> Result<AirdropConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents, Some(path))?;
    log::debug!(
        "Loaded {} projects from {}",
        config.projects.len(),
        path.display()
    );
    Ok(config)
}

/// Try loading config from a discovered path, falling back on any problem
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AirdropConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, Some(config_path)) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.airdrop.toml`.
pub fn discover_config(start: PathBuf) -> AirdropConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using built-in projects.",
                MAX_TRAVERSAL_DEPTH
            );
            AirdropConfig::default()
        })
}

/// Resolve the configuration for this run.
///
/// An explicit path must load cleanly; otherwise the working directory and
/// its ancestors are searched, and the built-in table is the fallback.
pub fn load_config(explicit: Option<&Path>) -> Result<AirdropConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(AirdropConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    const ONE_PROJECT: &str = indoc! {r#"
        [[projects]]
        id = "zeta"
        name = "Zeta"
        ticker = "ZET"
        airdrop_percent = 10
        estimated_total_points = 1_000_000
        default_fdv = 200_000_000
        slider_max = 1_000_000_000
    "#};

    #[test]
    fn ancestors_stop_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn integers_are_accepted_for_amounts() {
        let config = parse_and_validate_config(ONE_PROJECT, None).unwrap();
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].estimated_total_points, 1_000_000.0);
        assert!(config.display.is_none());
    }

    #[test]
    fn missing_projects_fall_back_to_built_in_table() {
        let config = parse_and_validate_config("[display]\nuse_color = false\n", None).unwrap();
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn discovers_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), ONE_PROJECT).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.projects[0].id, "zeta");
    }

    #[test]
    fn invalid_discovered_config_falls_back() {
        let temp = TempDir::new().unwrap();
        let broken = ONE_PROJECT.replace("airdrop_percent = 10", "airdrop_percent = 400");
        fs::write(temp.path().join(CONFIG_FILE_NAME), broken).unwrap();

        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config.projects.len(), 3);
    }

    #[test]
    fn invalid_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "projects = \"nope\"").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(Error::Toml(_))));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }
}
