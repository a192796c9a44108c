//! Navigation trail state.
//!
//! - [`BreadcrumbTrail`] - the trail store and its mutation operations
//! - [`BreadcrumbItem`] - a single entry; only the last one is active
//! - [`SetOptions`] - replace/append, home item and truncation options
//! - [`slugify`] - the label-to-value rule used by the builders
//!
//! # Example
//!
//! ```
//! use waypoint::breadcrumbs::{BreadcrumbTrail, SetOptions};
//!
//! let mut trail = BreadcrumbTrail::new();
//! trail.set_section_breadcrumbs("Projects", "Settings", SetOptions::new());
//!
//! assert_eq!(trail.current_path(), "Home / Projects / Settings");
//! assert_eq!(trail.current_item().unwrap().label, "Settings");
//!
//! trail.go_back(1);
//! assert_eq!(trail.current_item().unwrap().label, "Projects");
//! ```

pub mod builders;
pub mod item;
pub mod options;
pub mod trail;

pub use builders::slugify;
pub use item::{BreadcrumbItem, ELLIPSIS_VALUE, HOME_VALUE};
pub use options::SetOptions;
pub use trail::{BreadcrumbTrail, TrailEvent};
