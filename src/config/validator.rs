//! Settings validation rules.
//!
//! - `links.history_limit` must be at least 1
//! - Confidence thresholds must lie within `[0, 1]`
//! - `links.low_confidence` must not exceed `links.high_confidence`
//! - `breadcrumbs.home_label` must not be blank

use crate::config::schema::WaypointConfig;
use crate::error::{Result, WaypointError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Settings key the rule applies to
    pub key: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, key: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Validate settings and return every problem found.
pub fn validate_config(config: &WaypointConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let links = &config.links;

    if links.history_limit == 0 {
        errors.push(ValidationError::new(
            "history-limit",
            "links.history_limit",
            "links.history_limit must be at least 1",
        ));
    }

    for (key, value) in [
        ("links.high_confidence", links.high_confidence),
        ("links.low_confidence", links.low_confidence),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::new(
                "confidence-range",
                key,
                format!("{} must be between 0 and 1 (got {})", key, value),
            ));
        }
    }

    if links.low_confidence > links.high_confidence {
        errors.push(ValidationError::new(
            "confidence-order",
            "links.low_confidence",
            format!(
                "links.low_confidence ({}) must not exceed links.high_confidence ({})",
                links.low_confidence, links.high_confidence
            ),
        ));
    }

    if config.breadcrumbs.home_label.trim().is_empty() {
        errors.push(ValidationError::new(
            "blank-home-label",
            "breadcrumbs.home_label",
            "breadcrumbs.home_label must not be blank",
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &WaypointConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(WaypointError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
