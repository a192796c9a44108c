//! Declarative wizard definitions.
//!
//! A wizard can be described in YAML and turned into a [`WizardProgression`]
//! whose steps validate with [`FieldRules`]:
//!
//! ```yaml
//! title: New project
//! steps:
//!   - title: Basics
//!     fields:
//!       - name: name
//!         label: Project name
//!         required: true
//!         pattern: "^[a-z][a-z0-9-]*$"
//!       - name: license
//!         options: [MIT, Apache-2.0]
//!   - title: Review
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use super::progression::WizardProgression;
use super::schema::{StepData, StepSchema, Validation, ValidationErrors};
use super::step::WizardStep;
use crate::error::{Result, WaypointError};

/// A wizard described as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}

/// One step of a [`WizardDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
}

/// A single input collected by a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,

    /// Display label, defaulting to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Allowed values. Empty means any value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Pre-filled answer offered by prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldDefinition {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

impl WizardDefinition {
    /// Load a definition from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a definition from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let definition: Self =
            serde_yaml::from_str(content).map_err(|e| WaypointError::WizardDefinitionError {
                message: e.to_string(),
            })?;
        definition.check()?;
        Ok(definition)
    }

    /// Build the steps, compiling each step's field rules.
    pub fn to_steps(&self) -> Result<Vec<WizardStep>> {
        self.steps
            .iter()
            .map(|step| -> Result<WizardStep> {
                let mut built = WizardStep::new(&step.title);
                if let Some(description) = &step.description {
                    built = built.with_description(description);
                }
                if let Some(icon) = &step.icon {
                    built = built.with_icon(icon);
                }
                if !step.fields.is_empty() {
                    built = built.with_schema(FieldRules::new(step.fields.clone())?);
                }
                Ok(built)
            })
            .collect()
    }

    /// Build a ready-to-run progression.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWizard` when no steps are defined, or `InvalidPattern`
    /// when a field pattern does not compile.
    pub fn build(&self) -> Result<WizardProgression> {
        WizardProgression::new(self.to_steps()?)
    }

    fn check(&self) -> Result<()> {
        for step in &self.steps {
            if step.title.trim().is_empty() {
                return Err(WaypointError::WizardDefinitionError {
                    message: "step title must not be empty".to_string(),
                });
            }
            let mut seen = HashSet::new();
            for field in &step.fields {
                if field.name.trim().is_empty() {
                    return Err(WaypointError::WizardDefinitionError {
                        message: format!("step '{}' has a field without a name", step.title),
                    });
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(WaypointError::WizardDefinitionError {
                        message: format!(
                            "step '{}' defines field '{}' more than once",
                            step.title, field.name
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Built-in schema checking a step's fields.
///
/// Checks, per field: presence when required, minimum length, pattern and
/// allowed options. Empty strings count as missing.
#[derive(Debug)]
pub struct FieldRules {
    fields: Vec<(FieldDefinition, Option<Regex>)>,
}

impl FieldRules {
    /// Compile the rules for `fields`.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self> {
        let fields = fields
            .into_iter()
            .map(|field| -> Result<(FieldDefinition, Option<Regex>)> {
                let pattern = match &field.pattern {
                    Some(p) => Some(Regex::new(p).map_err(|e| WaypointError::InvalidPattern {
                        field: field.name.clone(),
                        message: e.to_string(),
                    })?),
                    None => None,
                };
                Ok((field, pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().map(|(field, _)| field)
    }

    fn check_field(field: &FieldDefinition, pattern: Option<&Regex>, data: &StepData) -> Option<String> {
        let label = field.display_label();
        let Some(value) = data.get(&field.name).and_then(text_value) else {
            return field.required.then(|| format!("{} is required", label));
        };

        if let Some(min) = field.min_length {
            if value.chars().count() < min {
                return Some(format!("{} must be at least {} characters", label, min));
            }
        }

        if let Some(regex) = pattern {
            if !regex.is_match(&value) {
                return Some(format!("{} has an invalid format", label));
            }
        }

        if !field.options.is_empty() && !field.options.iter().any(|o| *o == value) {
            return Some(format!("{} must be one of: {}", label, field.options.join(", ")));
        }

        None
    }
}

impl StepSchema for FieldRules {
    fn validate(&self, data: &StepData) -> Validation {
        let errors: ValidationErrors = self
            .fields
            .iter()
            .filter_map(|(field, pattern)| {
                Self::check_field(field, pattern.as_ref(), data).map(|message| (field.name.clone(), message))
            })
            .collect();
        Validation::from_errors(errors)
    }
}

/// Render a JSON value as field text. Null and empty strings are missing.
fn text_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
