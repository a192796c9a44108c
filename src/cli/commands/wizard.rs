//! Wizard command implementation.
//!
//! The `waypoint wizard` command drives a [`WizardProgression`] built from a
//! YAML definition. Answers come from prompts, or from an answers file with
//! one mapping per step:
//!
//! ```yaml
//! - name: atlas
//!   license: MIT
//! - {}
//! ```

use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

use crate::cli::args::WizardArgs;
use crate::error::{Result, WaypointError};
use crate::ui::{Prompt, UserInterface};
use crate::wizard::{
    Advance, FieldDefinition, StepData, ValidationErrors, WizardDefinition, WizardProgression,
};

use super::dispatcher::{resolve_path, Command, CommandResult};

/// The wizard command implementation.
pub struct WizardCommand {
    project_root: PathBuf,
    args: WizardArgs,
}

impl WizardCommand {
    pub fn new(project_root: &Path, args: WizardArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn load_answers(&self, path: &Path) -> Result<Vec<StepData>> {
        let content = std::fs::read_to_string(resolve_path(&self.project_root, path))?;
        serde_yaml::from_str(&content).map_err(|e| WaypointError::WizardDefinitionError {
            message: format!("invalid answers file: {}", e),
        })
    }

    /// Ask for every field of the current step.
    fn prompt_step(
        &self,
        ui: &mut dyn UserInterface,
        fields: &[FieldDefinition],
        current: &StepData,
    ) -> Result<StepData> {
        let mut data = Map::new();
        for field in fields {
            let previous = current
                .get(&field.name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| field.default.clone());

            let mut prompt = if field.options.is_empty() {
                Prompt::input(&field.name, field.display_label())
            } else {
                Prompt::select(&field.name, field.display_label(), &field.options)
            };
            if let Some(default) = previous {
                prompt = prompt.with_default(default);
            }

            let answer = ui.prompt(&prompt)?.as_string();
            if !answer.trim().is_empty() {
                data.insert(field.name.clone(), Value::String(answer));
            }
        }
        Ok(Value::Object(data))
    }

    fn report_errors(ui: &mut dyn UserInterface, errors: &ValidationErrors) {
        for message in errors.values() {
            ui.warning(message);
        }
    }

    fn finish(&self, ui: &mut dyn UserInterface, wizard: &WizardProgression, title: &str) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&wizard.summary())
                .map_err(|e| WaypointError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_details() {
            for step in wizard.summary() {
                ui.message(&format!("{}: {}", step.title, step.data));
            }
        }
        ui.success(&format!("{} complete", title));
        Ok(CommandResult::success())
    }
}

impl Command for WizardCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let definition = WizardDefinition::load(&resolve_path(&self.project_root, &self.args.definition))?;
        let mut wizard = definition.build()?;
        let title = definition.title.clone().unwrap_or_else(|| "Wizard".to_string());
        let answers = match &self.args.answers {
            Some(path) => Some(self.load_answers(path)?),
            None => None,
        };

        if !self.args.json {
            ui.show_header(&title);
        }

        loop {
            let index = wizard.current_step_index();
            let step = &definition.steps[index];

            let data = match &answers {
                Some(answers) => answers.get(index).cloned().unwrap_or_else(|| json!({})),
                None => {
                    if !self.args.json {
                        ui.show_progress(index + 1, wizard.step_count());
                        ui.message(&step.title);
                        if let Some(description) = &step.description {
                            ui.message(description);
                        }
                    }
                    self.prompt_step(ui, &step.fields, wizard.working_data())?
                }
            };

            match wizard.next_with(data) {
                Advance::Moved { .. } => {}
                Advance::Completed(_) => return self.finish(ui, &wizard, &title),
                Advance::Blocked(errors) => {
                    Self::report_errors(ui, &errors);
                    if answers.is_some() || !ui.is_interactive() {
                        ui.error(&format!("Step '{}' did not pass validation", step.title));
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
        }
    }
}
