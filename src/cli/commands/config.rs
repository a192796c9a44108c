//! Config command implementation.
//!
//! The `waypoint config` command shows resolved settings.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, WaypointConfig};
use crate::error::{Result, WaypointError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config: WaypointConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config: &WaypointConfig, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.config)
                .map_err(|e| WaypointError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let paths = ConfigPaths::discover(&self.project_root);
        let existing = paths.all_existing();
        if existing.is_empty() {
            ui.message("# defaults (no .waypoint/config.yml found)");
        } else {
            for path in &existing {
                ui.message(&format!("# {}", path.display()));
            }
        }

        let yaml = serde_yaml::to_string(&self.config).map_err(|e| WaypointError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}
