//! Trail command implementation.
//!
//! The `waypoint trail` command composes a breadcrumb trail from path
//! segments and prints it.

use crate::breadcrumbs::{BreadcrumbTrail, SetOptions};
use crate::cli::args::TrailArgs;
use crate::config::WaypointConfig;
use crate::error::{Result, WaypointError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The trail command implementation.
pub struct TrailCommand {
    config: WaypointConfig,
    args: TrailArgs,
}

impl TrailCommand {
    pub fn new(config: &WaypointConfig, args: TrailArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    fn build(&self) -> BreadcrumbTrail {
        let mut trail = BreadcrumbTrail::with_settings(self.config.breadcrumbs.clone());
        let mut options = SetOptions::new().auto_home(!self.args.no_home);
        if let Some(max) = self.args.max_items {
            options = options.max_items(max);
        }
        trail.set_nested_breadcrumbs(&self.args.segments, options);
        trail
    }
}

impl Command for TrailCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let trail = self.build();

        if self.args.json {
            let json = serde_json::to_string_pretty(trail.items())
                .map_err(|e| WaypointError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&trail.current_path());

        if ui.output_mode().shows_details() {
            for item in trail.items() {
                let marker = if item.is_active() { "*" } else { " " };
                let href = item.href.as_deref().unwrap_or("-");
                ui.message(&format!("{} {:<20} {}", marker, item.label, href));
            }
        }

        Ok(CommandResult::success())
    }
}
