//! Links command implementation.
//!
//! The `waypoint links` command reads a links file (the JSON produced by
//! [`LinkHistoryStore::export_links`]), applies one operation and writes the
//! file back when the links changed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::{LinksAction, LinksArgs};
use crate::config::WaypointConfig;
use crate::error::{Result, WaypointError};
use crate::key::ItemKey;
use crate::links::LinkHistoryStore;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The links command implementation.
pub struct LinksCommand {
    project_root: PathBuf,
    config: WaypointConfig,
    args: LinksArgs,
}

impl LinksCommand {
    pub fn new(project_root: &Path, config: &WaypointConfig, args: LinksArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Load the store from `path`. A missing file gives an empty store.
    fn open(&self, path: &Path) -> Result<LinkHistoryStore> {
        let mut store = LinkHistoryStore::with_settings(self.config.links.clone());
        if path.exists() {
            let content = fs::read_to_string(path)?;
            if !content.trim().is_empty() {
                store.try_import_links(&content)?;
            }
        }
        Ok(store)
    }

    fn save(&self, store: &LinkHistoryStore, path: &Path) -> Result<()> {
        let mut json = store.export_links()?;
        json.push('\n');
        fs::write(path, json)?;
        tracing::debug!("Wrote {} links to {}", store.total_links(), path.display());
        Ok(())
    }

    fn stats(&self, ui: &mut dyn UserInterface, path: &Path, json: bool) -> Result<CommandResult> {
        if !path.exists() {
            ui.error(&format!("Links file not found: {}", path.display()));
            return Ok(CommandResult::failure(2));
        }
        let store = self.open(path)?;
        let stats = store.stats();

        if json {
            let out = serde_json::to_string_pretty(&stats).map_err(|e| WaypointError::Other(e.into()))?;
            ui.message(&out);
            return Ok(CommandResult::success());
        }

        let settings = store.settings();
        ui.show_header(&format!("Links in {}", path.display()));
        ui.message(&format!("Total links:        {}", stats.total_links));
        ui.message(&format!("Average confidence: {:.2}", stats.average_confidence));
        ui.message(&format!(
            "High confidence:    {} (>= {})",
            stats.high_confidence, settings.high_confidence
        ));
        ui.message(&format!(
            "Low confidence:     {} (< {})",
            stats.low_confidence, settings.low_confidence
        ));

        if ui.output_mode().shows_details() {
            for pair in store.low_confidence_links() {
                let score = pair
                    .confidence
                    .map_or_else(|| "unscored".to_string(), |c| format!("{:.2}", c));
                ui.warning(&format!("{} -> {} ({})", pair.old_id, pair.new_id, score));
            }
        }

        Ok(CommandResult::success())
    }

    fn add(
        &self,
        ui: &mut dyn UserInterface,
        path: &Path,
        old_id: &str,
        new_id: &str,
        confidence: Option<f64>,
    ) -> Result<CommandResult> {
        let mut store = self.open(path)?;
        let (old_id, new_id) = (ItemKey::parse(old_id), ItemKey::parse(new_id));
        let existed = store.pairs().iter().any(|p| p.matches(&old_id, &new_id));

        store.add_link(old_id.clone(), new_id.clone(), confidence);
        self.save(&store, path)?;

        let verb = if existed { "Updated" } else { "Linked" };
        ui.success(&format!("{} {} -> {}", verb, old_id, new_id));
        Ok(CommandResult::success())
    }

    fn remove(&self, ui: &mut dyn UserInterface, path: &Path, old_id: &str, new_id: &str) -> Result<CommandResult> {
        if !path.exists() {
            ui.error(&format!("Links file not found: {}", path.display()));
            return Ok(CommandResult::failure(2));
        }
        let mut store = self.open(path)?;
        let (old_id, new_id) = (ItemKey::parse(old_id), ItemKey::parse(new_id));

        if !store.remove_link(&old_id, &new_id) {
            ui.warning(&format!("No link between {} and {}", old_id, new_id));
            return Ok(CommandResult::failure(1));
        }

        self.save(&store, path)?;
        ui.success(&format!("Removed {} -> {}", old_id, new_id));
        Ok(CommandResult::success())
    }
}

impl Command for LinksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.action {
            LinksAction::Stats { file, json } => {
                self.stats(ui, &resolve_path(&self.project_root, file), *json)
            }
            LinksAction::Add {
                file,
                old_id,
                new_id,
                confidence,
            } => self.add(
                ui,
                &resolve_path(&self.project_root, file),
                old_id,
                new_id,
                *confidence,
            ),
            LinksAction::Remove {
                file,
                old_id,
                new_id,
            } => self.remove(ui, &resolve_path(&self.project_root, file), old_id, new_id),
        }
    }
}
