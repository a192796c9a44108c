//! Breadcrumb items.

use serde::{Deserialize, Serialize};

use crate::key::ItemKey;

/// Value of the synthesized home item.
pub const HOME_VALUE: &str = "home";

/// Value of the placeholder inserted when a trail is truncated.
pub const ELLIPSIS_VALUE: &str = "ellipsis";

/// A single entry in a navigation trail.
///
/// `active` is owned by the trail: it is recomputed on every mutation so
/// that only the last item is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    /// Display text.
    pub label: String,

    /// Navigation target. Items without one are not navigable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Identity used for removal and lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ItemKey>,

    /// Whether the item is rendered as non-interactive.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default)]
    active: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl BreadcrumbItem {
    /// Create an item with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the navigation target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the identity key.
    pub fn with_value(mut self, value: impl Into<ItemKey>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark the item disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The placeholder that stands in for truncated items.
    pub fn ellipsis() -> Self {
        Self::new("...").with_value(ELLIPSIS_VALUE).disabled()
    }

    /// Whether this is the current (last) item of its trail.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the item can be navigated to.
    pub fn is_navigable(&self) -> bool {
        self.href.is_some() && !self.disabled
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Mark the last item active and every other item inactive.
pub(crate) fn mark_last_active(items: &mut [BreadcrumbItem]) {
    let last = items.len().saturating_sub(1);
    for (index, item) in items.iter_mut().enumerate() {
        item.set_active(index == last);
    }
}
