//! Settings loading, merging, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use waypoint::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".waypoint");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "breadcrumbs:\n  home_label: Start\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.breadcrumbs.home_label, "Start");
//! assert_eq!(config.links.history_limit, 50);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{BreadcrumbSettings, LinkSettings, OutputMode, WaypointConfig};
pub use validator::{validate, validate_config, ValidationError};
