//! Dialoguer-backed prompts for wizard fields and CLI confirmations.
//!
//! Input fields accept empty answers so that optional wizard fields can be
//! skipped; required-field checks happen in the step schema, not here.

use console::Term;
use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, WaypointError};

use super::{parse_confirm, Prompt, PromptOption, PromptResult, PromptType};

/// Ask `prompt` on `term` and return the answer.
///
/// A closed terminal or interrupted read surfaces as [`WaypointError::Io`].
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => ask_yes_no(prompt, term).map(PromptResult::Bool),
        PromptType::Input => ask_text(prompt, term).map(PromptResult::String),
        PromptType::Select { options } => pick_option(prompt, options, term).map(PromptResult::String),
    }
}

fn interrupted(e: dialoguer::Error) -> WaypointError {
    WaypointError::Io(e.into())
}

fn ask_yes_no(prompt: &Prompt, term: &Term) -> Result<bool> {
    let default_yes = prompt.default.as_deref().is_none_or(parse_confirm);
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(default_yes)
        .interact_on(term)
        .map_err(interrupted)
}

fn ask_text(prompt: &Prompt, term: &Term) -> Result<String> {
    let mut field = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);
    if let Some(default) = &prompt.default {
        field = field.default(default.clone());
    }
    field.interact_on(term).map_err(interrupted)
}

/// Offer the option labels and return the chosen option's value.
///
/// The default answer is matched against option values; an unknown default
/// preselects the first option.
fn pick_option(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<String> {
    let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
    let preselected = prompt
        .default
        .as_ref()
        .and_then(|default| options.iter().position(|option| &option.value == default))
        .unwrap_or(0);

    let chosen = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(preselected)
        .interact_on(term)
        .map_err(interrupted)?;

    Ok(options[chosen].value.clone())
}
