//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, WaypointError};

use super::{parse_confirm, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

const PROMPT_ENV_PREFIX: &str = "WAYPOINT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `WAYPOINT_PROMPT_<KEY>` environment variables,
/// falling back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn override_for(&self, key: &str) -> Option<&String> {
        let env_key = format!(
            "{}{}",
            PROMPT_ENV_PREFIX,
            key.to_uppercase().replace(['-', '.', ' '], "_")
        );
        self.env_overrides.get(&env_key)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .override_for(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| WaypointError::ConfigValidationError {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            })?;

        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(parse_confirm(&answer))),
            _ => Ok(PromptResult::String(answer)),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_progress() {
            println!("[{}/{}]", current, total);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("name", "Name?").with_default("demo");

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result, PromptResult::String("demo".to_string()));
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&Prompt::input("name", "Name?"));
        assert!(result.is_err());
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("WAYPOINT_PROMPT_PROJECT_NAME".to_string(), "atlas".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let prompt = Prompt::input("project-name", "Name?").with_default("demo");
        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "atlas");
    }

    #[test]
    fn confirm_prompt_returns_bool() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::confirm("submit", "Submit?").with_default("yes");
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn output_mode_can_change() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        ui.set_output_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
