//! Multi-step wizard state.
//!
//! - [`WizardProgression`] - the step state machine
//! - [`WizardStep`] - a step descriptor with an optional [`StepSchema`]
//! - [`WizardDefinition`] - YAML-described wizards validated by [`FieldRules`]
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use waypoint::wizard::{Advance, StepData, Validation, WizardProgression, WizardStep};
//!
//! let mut wizard = WizardProgression::new(vec![
//!     WizardStep::new("Account").with_schema(|data: &StepData| {
//!         if data.get("email").is_some() {
//!             Validation::ok()
//!         } else {
//!             Validation::field_error("email", "Email is required")
//!         }
//!     }),
//!     WizardStep::new("Confirm"),
//! ])?;
//!
//! assert!(matches!(wizard.next(), Advance::Blocked(_)));
//! assert!(matches!(wizard.next_with(json!({"email": "a@b.c"})), Advance::Moved { .. }));
//! assert!(matches!(wizard.next(), Advance::Completed(_)));
//! assert_eq!(wizard.progress_percent(), 100.0);
//! # Ok::<(), waypoint::WaypointError>(())
//! ```

pub mod definition;
pub mod progression;
pub mod schema;
pub mod step;

pub use definition::{FieldDefinition, FieldRules, StepDefinition, WizardDefinition};
pub use progression::{Advance, StepSummary, WizardEvent, WizardProgression};
pub use schema::{StepData, StepSchema, Validation, ValidationErrors};
pub use step::WizardStep;
