//! Terminal output and prompts for `waypoint` commands.
//!
//! Status lines (messages, successes, warnings) respect the output mode;
//! errors are always printed. Headers and step progress only appear in
//! normal and verbose modes.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NonInteractiveUI, OutputMode, Prompt, PromptResult,
    UserInterface, WaypointTheme,
};

/// UI writing to stdout and prompting through dialoguer.
pub struct TerminalUI {
    term: Term,
    theme: WaypointTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Build a terminal UI, dropping colors when `NO_COLOR` is set or stdout
    /// is not a terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            WaypointTheme::new()
        } else {
            WaypointTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn status_line(&mut self, line: String) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", line).ok();
        }
    }

    fn progress_line(&mut self, line: String) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", line).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.status_line(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.status_line(line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.status_line(line);
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        let line = format!("\n{}\n", self.theme.format_header(title));
        self.progress_line(line);
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        let line = self.theme.format_progress(current, total);
        self.progress_line(line);
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Pick the terminal UI when prompting is wanted and stdout is a terminal,
/// otherwise answer prompts from `WAYPOINT_PROMPT_*` variables and defaults.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
