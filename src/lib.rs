//! Waypoint - Navigation trails, migration links and step wizards.
//!
//! Waypoint provides three in-memory state stores for interactive
//! applications, plus a small CLI to drive them from the terminal.
//!
//! # Modules
//!
//! - [`breadcrumbs`] - Breadcrumb trail with truncation and home item
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`key`] - String-or-number identity keys
//! - [`links`] - Old/new record links with undo/redo history
//! - [`reactive`] - Change subscriptions shared by the stores
//! - [`ui`] - Prompts and terminal output
//! - [`wizard`] - Multi-step wizard state machine
//!
//! # Example
//!
//! ```
//! use waypoint::breadcrumbs::{BreadcrumbTrail, SetOptions};
//! use waypoint::links::LinkHistoryStore;
//!
//! let mut trail = BreadcrumbTrail::new();
//! trail.set_page_breadcrumbs("Migration", SetOptions::new());
//! assert_eq!(trail.current_path(), "Home / Migration");
//!
//! let mut links = LinkHistoryStore::new();
//! links.add_link(1, "a1", Some(0.95));
//! assert_eq!(links.high_confidence_links().len(), 1);
//! ```

pub mod breadcrumbs;
pub mod cli;
pub mod config;
pub mod error;
pub mod key;
pub mod links;
pub mod reactive;
pub mod ui;
pub mod wizard;

pub use error::{Result, WaypointError};
