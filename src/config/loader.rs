//! Settings file discovery and loading.
//!
//! Settings live in the project's `.waypoint` directory:
//! 1. Project settings (`.waypoint/config.yml`)
//! 2. Local overrides (`.waypoint/config.local.yml`)
//!
//! Later files override earlier ones. A project without settings files
//! runs with [`WaypointConfig::default`].

use crate::config::merger::merge_configs;
use crate::config::schema::WaypointConfig;
use crate::config::validator::validate;
use crate::error::{Result, WaypointError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project settings directory.
pub const CONFIG_DIR: &str = ".waypoint";

/// Paths to settings files in merge order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project settings: .waypoint/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .waypoint/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover settings files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing settings paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any project settings file exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Read a settings file as a raw YAML value (for merging).
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_settings(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Null);
    }
    serde_yaml::from_str(&content).map_err(|e| WaypointError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate a single settings file without merging.
pub fn load_config_file(path: &Path) -> Result<WaypointConfig> {
    let content = read_settings(path)?;
    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML content into settings. Empty content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<WaypointConfig> {
    if content.trim().is_empty() {
        return Ok(WaypointConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| WaypointError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, merge and validate all settings files for a project.
pub fn load_merged_config(project_root: &Path) -> Result<WaypointConfig> {
    let paths = ConfigPaths::discover(project_root);

    let layers = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    if layers.is_empty() {
        tracing::debug!("No settings found under {}", project_root.display());
        return Ok(WaypointConfig::default());
    }

    let merged = merge_configs(&layers);
    let config: WaypointConfig =
        serde_yaml::from_value(merged).map_err(|e| WaypointError::ConfigParseError {
            path: project_root.join(CONFIG_DIR).join("config.yml"),
            message: format!("Failed to parse merged settings: {}", e),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Load settings with an optional explicit file.
///
/// An explicit file is loaded on its own; otherwise the project's files
/// are discovered and merged.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<WaypointConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn read_settings(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WaypointError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WaypointError::Io(e)
        }
    })
}
