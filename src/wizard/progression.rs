//! The wizard state machine.
//!
//! States are step indices `0..N`. The progression moves between them:
//!
//! ```text
//! next()        valid data  -> record data, mark completed, index + 1
//!               last step   -> record data, mark completed, Completed event
//!               invalid     -> Blocked(errors), nothing else changes
//! previous()    index - 1, no validation, nothing cleared
//! go_to_step(i) allowed for i <= highest completed + 1
//! ```
//!
//! # Invariants
//!
//! 1. There is at least one step and `current_step_index < steps.len()`.
//! 2. An index is in `completed_steps` only after its data passed validation.
//! 3. `step_data` only holds data for completed steps.

use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::schema::{StepData, ValidationErrors};
use super::step::WizardStep;
use crate::error::{Result, WaypointError};
use crate::reactive::{Subscribers, Subscription};

/// Outcome of [`WizardProgression::next`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Validation failed; the step did not change.
    Blocked(ValidationErrors),
    /// Moved forward to the next step.
    Moved { from: usize, to: usize },
    /// The last step was submitted. Carries all recorded step data.
    Completed(BTreeMap<usize, StepData>),
}

/// Change notifications from a [`WizardProgression`].
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    StepChanged { from: usize, to: usize },
    Completed { step_data: BTreeMap<usize, StepData> },
    Reset,
}

/// A completed step and the data recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummary {
    pub index: usize,
    pub title: String,
    pub data: StepData,
}

/// Step-indexed navigation gated by per-step validation.
#[derive(Debug)]
pub struct WizardProgression {
    steps: Vec<WizardStep>,
    current: usize,
    working: StepData,
    step_data: BTreeMap<usize, StepData>,
    completed: BTreeSet<usize>,
    last_errors: ValidationErrors,
    subscribers: Subscribers<WizardEvent>,
}

impl WizardProgression {
    /// Create a wizard positioned on its first step.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWizard` if `steps` is empty.
    pub fn new(steps: Vec<WizardStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(WaypointError::EmptyWizard);
        }
        Ok(Self {
            steps,
            current: 0,
            working: empty_data(),
            step_data: BTreeMap::new(),
            completed: BTreeSet::new(),
            last_errors: ValidationErrors::new(),
            subscribers: Subscribers::new(),
        })
    }

    pub fn subscribe(&mut self, callback: impl Fn(&WizardEvent) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    // --- Navigation ---

    /// Replace the working data of the current step.
    pub fn capture(&mut self, data: StepData) {
        self.working = data;
    }

    /// Validate the current step and move forward.
    pub fn next(&mut self) -> Advance {
        let step = &self.steps[self.current];
        let validation = step.validate(&self.working);
        if !validation.valid {
            debug!(
                "Step {} ({}) blocked: {} error(s)",
                self.current,
                step.title,
                validation.errors.len()
            );
            self.last_errors = validation.errors;
            return Advance::Blocked(self.last_errors.clone());
        }

        self.last_errors.clear();
        self.step_data.insert(self.current, self.working.clone());
        self.completed.insert(self.current);

        if self.is_last_step() {
            debug!("Wizard completed with {} step(s) recorded", self.step_data.len());
            let step_data = self.step_data.clone();
            self.subscribers.notify(&WizardEvent::Completed {
                step_data: step_data.clone(),
            });
            return Advance::Completed(step_data);
        }

        let from = self.current;
        self.enter(from + 1);
        Advance::Moved {
            from,
            to: self.current,
        }
    }

    /// Capture `data` and then call [`next`](Self::next).
    pub fn next_with(&mut self, data: StepData) -> Advance {
        self.capture(data);
        self.next()
    }

    /// Step back without validating. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.enter(self.current - 1);
        true
    }

    /// Jump to `index` if [`can_go_to`](Self::can_go_to) allows it.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        if !self.can_go_to(index) {
            debug!("Rejected jump to step {}", index);
            return false;
        }
        if index != self.current {
            self.enter(index);
        }
        true
    }

    /// Back to the first step with all data and completion cleared.
    pub fn reset(&mut self) {
        self.current = 0;
        self.working = empty_data();
        self.step_data.clear();
        self.completed.clear();
        self.last_errors.clear();
        self.subscribers.notify(&WizardEvent::Reset);
    }

    // --- Queries ---

    /// Whether `index` is a completed step or the first uncompleted one.
    pub fn can_go_to(&self, index: usize) -> bool {
        let reachable = self.completed.last().map_or(0, |highest| highest + 1);
        index < self.steps.len() && index <= reachable
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.current]
    }

    /// Data being edited on the current step.
    pub fn working_data(&self) -> &StepData {
        &self.working
    }

    /// Data recorded for completed steps.
    pub fn step_data(&self) -> &BTreeMap<usize, StepData> {
        &self.step_data
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Errors from the most recent blocked `next`, cleared on navigation.
    pub fn last_errors(&self) -> &ValidationErrors {
        &self.last_errors
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Share of steps completed, in percent.
    pub fn progress_percent(&self) -> f64 {
        self.completed.len() as f64 / self.steps.len() as f64 * 100.0
    }

    /// Completed steps in index order with their recorded data.
    pub fn summary(&self) -> Vec<StepSummary> {
        self.completed
            .iter()
            .map(|&index| StepSummary {
                index,
                title: self.steps[index].title.clone(),
                data: self.step_data.get(&index).cloned().unwrap_or_else(empty_data),
            })
            .collect()
    }

    fn enter(&mut self, index: usize) {
        let from = self.current;
        self.current = index;
        self.working = self.step_data.get(&index).cloned().unwrap_or_else(empty_data);
        self.last_errors.clear();
        self.subscribers
            .notify(&WizardEvent::StepChanged { from, to: index });
    }
}

fn empty_data() -> StepData {
    json!({})
}
