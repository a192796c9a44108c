//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, WaypointConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load settings from `path` instead of discovering them.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve settings and apply their output mode when no flag was given.
    pub fn load_settings(&self, ui: &mut dyn UserInterface) -> Result<WaypointConfig> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.output {
                ui.set_output_mode(mode.into());
            }
        }
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.load_settings(ui)?;

        match &cli.command {
            Commands::Trail(args) => {
                let cmd = super::trail::TrailCommand::new(&config, args.clone());
                cmd.execute(ui)
            }
            Commands::Links(args) => {
                let cmd = super::links::LinksCommand::new(&self.project_root, &config, args.clone());
                cmd.execute(ui)
            }
            Commands::Wizard(args) => {
                let cmd = super::wizard::WizardCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(&self.project_root, &config, args.clone());
                cmd.execute(ui)
            }
        }
    }
}

/// Resolve `path` against the project root unless it is absolute.
pub(crate) fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
