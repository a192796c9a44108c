//! Settings schema definitions.
//!
//! These structs map to the YAML settings file format:
//!
//! ```yaml
//! output: verbose
//! breadcrumbs:
//!   home_label: Dashboard
//!   home_href: /app
//!   max_items: 5
//! links:
//!   history_limit: 100
//!   high_confidence: 0.85
//! ```

use serde::{Deserialize, Serialize};

/// Root settings structure for `.waypoint/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointConfig {
    /// Default output mode for the CLI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,

    /// Breadcrumb trail defaults.
    pub breadcrumbs: BreadcrumbSettings,

    /// Link store limits and thresholds.
    pub links: LinkSettings,
}

/// Output verbosity configured in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Quiet,
    Silent,
}

/// Defaults applied by the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbSettings {
    /// Label of the synthesized home item.
    pub home_label: String,

    /// Target of the synthesized home item.
    pub home_href: String,

    /// Icon of the synthesized home item.
    pub home_icon: String,

    /// Default truncation limit when a call does not pass one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Default for BreadcrumbSettings {
    fn default() -> Self {
        Self {
            home_label: "Home".to_string(),
            home_href: "/".to_string(),
            home_icon: "home".to_string(),
            max_items: None,
        }
    }
}

/// Limits and thresholds for the link store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Maximum number of history snapshots kept.
    pub history_limit: usize,

    /// Links at or above this confidence are "high confidence".
    pub high_confidence: f64,

    /// Links below this confidence are "low confidence".
    pub low_confidence: f64,
}

impl LinkSettings {
    /// Default history bound.
    pub const DEFAULT_HISTORY_LIMIT: usize = 50;
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            high_confidence: 0.8,
            low_confidence: 0.6,
        }
    }
}
