//! Migration link tracking with undo/redo.
//!
//! - [`LinkHistoryStore`] - the mapping between old and new records
//! - [`LinkedPair`] - one link, serialized in camelCase JSON
//! - [`SnapshotHistory`] - bounded linear history of cloned snapshots
//!
//! # Example
//!
//! ```
//! use waypoint::key::ItemKey;
//! use waypoint::links::LinkHistoryStore;
//!
//! let mut store = LinkHistoryStore::new();
//! store.add_link("customer-7", 7, Some(0.92));
//! store.add_link("customer-8", 8, None);
//! assert_eq!(store.total_links(), 2);
//!
//! store.undo();
//! assert!(!store.is_old_item_linked(&ItemKey::from("customer-8")));
//!
//! store.redo();
//! assert_eq!(store.low_confidence_links().len(), 1);
//! ```

pub mod history;
pub mod pair;
pub mod store;

pub use history::SnapshotHistory;
pub use pair::LinkedPair;
pub use store::{LinkChange, LinkEvent, LinkHistoryStore, LinkStats};
