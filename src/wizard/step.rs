//! Wizard step descriptors.

use std::fmt;
use std::rc::Rc;

use super::schema::{StepData, StepSchema, Validation};

/// One step of a wizard.
///
/// A step without a schema always validates.
#[derive(Clone)]
pub struct WizardStep {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    schema: Option<Rc<dyn StepSchema>>,
}

impl fmt::Debug for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardStep")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("icon", &self.icon)
            .field("has_schema", &self.schema.is_some())
            .finish()
    }
}

impl WizardStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            schema: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Gate advancement from this step on `schema`.
    pub fn with_schema(mut self, schema: impl StepSchema + 'static) -> Self {
        self.schema = Some(Rc::new(schema));
        self
    }

    pub fn has_schema(&self) -> bool {
        self.schema.is_some()
    }

    /// Validate `data` against this step's schema.
    pub fn validate(&self, data: &StepData) -> Validation {
        match &self.schema {
            Some(schema) => schema.validate(data),
            None => Validation::ok(),
        }
    }
}
