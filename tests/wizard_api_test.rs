//! Integration tests for the wizard public API.

use serde_json::json;
use waypoint::wizard::{
    Advance, StepData, Validation, WizardDefinition, WizardEvent, WizardProgression, WizardStep,
};
use waypoint::WaypointError;
use std::cell::RefCell;
use std::rc::Rc;

fn always_invalid(_: &StepData) -> Validation {
    Validation::field_error("value", "Value is wrong")
}

fn steps(n: usize) -> Vec<WizardStep> {
    (0..n).map(|i| WizardStep::new(format!("Step {}", i))).collect()
}

#[test]
fn failed_validation_blocks_advance() {
    let mut wizard =
        WizardProgression::new(vec![WizardStep::new("Gate").with_schema(always_invalid), WizardStep::new("After")])
            .unwrap();

    let outcome = wizard.next_with(json!({"value": 1}));

    assert_eq!(outcome, Advance::Blocked(always_invalid(&json!({})).errors));
    assert_eq!(wizard.current_step_index(), 0);
    assert!(!wizard.completed_steps().contains(&0));
}

#[test]
fn three_step_wizard_completes_with_all_data() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut wizard = WizardProgression::new(steps(3)).unwrap();
    let sink = Rc::clone(&events);
    let _sub = wizard.subscribe(move |event| {
        if let WizardEvent::Completed { step_data } = event {
            sink.borrow_mut().push(step_data.clone());
        }
    });

    for i in 0..3 {
        wizard.next_with(json!({ "step": i }));
    }

    let completions = events.borrow();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(completions[0][&2], json!({"step": 2}));
    assert_eq!(wizard.current_step_index(), 2);
}

#[test]
fn jumps_cannot_skip_gates() {
    let mut wizard = WizardProgression::new(steps(3)).unwrap();
    wizard.next();
    wizard.previous();

    assert!(!wizard.go_to_step(2));
    assert_eq!(wizard.current_step_index(), 0);
    assert!(wizard.go_to_step(1));
    assert_eq!(wizard.current_step_index(), 1);
}

#[test]
fn empty_step_list_is_an_error() {
    assert!(matches!(WizardProgression::new(Vec::new()), Err(WaypointError::EmptyWizard)));
}

#[test]
fn definition_builds_gated_wizard() {
    let definition = WizardDefinition::parse(
        r#"
title: Signup
steps:
  - title: Account
    fields:
      - name: email
        required: true
        pattern: "^[^@]+@[^@]+$"
  - title: Done
"#,
    )
    .unwrap();
    let mut wizard = definition.build().unwrap();

    let Advance::Blocked(errors) = wizard.next_with(json!({"email": "nope"})) else {
        panic!("expected validation failure");
    };
    assert!(errors.contains_key("email"));

    assert!(matches!(
        wizard.next_with(json!({"email": "a@b.io"})),
        Advance::Moved { from: 0, to: 1 }
    ));
    assert!(matches!(wizard.next(), Advance::Completed(_)));
    assert_eq!(wizard.progress_percent(), 100.0);
    assert_eq!(wizard.summary()[0].title, "Account");
}
