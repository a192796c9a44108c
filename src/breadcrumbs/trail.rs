//! The breadcrumb trail store.

use tracing::debug;

use super::item::{mark_last_active, BreadcrumbItem, HOME_VALUE};
use super::options::SetOptions;
use crate::config::BreadcrumbSettings;
use crate::key::ItemKey;
use crate::reactive::{Subscribers, Subscription};

/// Change notification sent after every trail mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TrailEvent {
    /// The trail changed; carries a copy of the new trail.
    Changed { items: Vec<BreadcrumbItem> },
}

/// An ordered navigation trail.
///
/// # Invariants
///
/// 1. When the trail is non-empty exactly one item is active: the last one.
/// 2. Invalid requests (unknown keys, going back too far) leave the trail
///    untouched.
#[derive(Debug, Default)]
pub struct BreadcrumbTrail {
    items: Vec<BreadcrumbItem>,
    settings: BreadcrumbSettings,
    subscribers: Subscribers<TrailEvent>,
}

impl BreadcrumbTrail {
    /// Create an empty trail with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with the given settings.
    pub fn with_settings(settings: BreadcrumbSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// The settings this trail was created with.
    pub fn settings(&self) -> &BreadcrumbSettings {
        &self.settings
    }

    /// Read-only view of the trail.
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a callback invoked after every change.
    pub fn subscribe(&mut self, callback: impl Fn(&TrailEvent) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Replace or extend the trail.
    ///
    /// Returns the composed segment: the whole trail when replacing, only the
    /// appended items otherwise.
    pub fn set_breadcrumbs(
        &mut self,
        items: Vec<BreadcrumbItem>,
        options: SetOptions,
    ) -> Vec<BreadcrumbItem> {
        let replace = options.replace.unwrap_or(true);
        let auto_home = options.auto_home.unwrap_or(false);

        let mut composed = Vec::with_capacity(items.len() + 1);
        if auto_home && (replace || self.items.is_empty()) {
            composed.push(self.home_item(&options));
        }
        composed.extend(items);

        let max_items = options
            .max_items
            .or(self.settings.max_items)
            .filter(|&max| max > 0);
        if let Some(max) = max_items {
            composed = truncate(composed, max);
        }
        mark_last_active(&mut composed);

        if replace {
            self.items = composed.clone();
        } else {
            self.items.extend(composed.iter().cloned());
            mark_last_active(&mut self.items);
        }

        debug!(
            "Breadcrumbs {} ({} items, trail length {})",
            if replace { "replaced" } else { "appended" },
            composed.len(),
            self.items.len()
        );
        self.changed();
        composed
    }

    /// Append a single item and make it the active one.
    pub fn add_breadcrumb(&mut self, mut item: BreadcrumbItem) {
        for existing in &mut self.items {
            existing.set_active(false);
        }
        item.set_active(true);
        self.items.push(item);
        self.changed();
    }

    /// Remove the first item whose value equals `value`.
    ///
    /// Returns whether an item was removed.
    pub fn remove_breadcrumb(&mut self, value: &ItemKey) -> bool {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.value.as_ref() == Some(value))
        else {
            return false;
        };

        self.items.remove(index);
        mark_last_active(&mut self.items);
        debug!("Removed breadcrumb {} at {}", value, index);
        self.changed();
        true
    }

    /// Empty the trail.
    pub fn clear_breadcrumbs(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.changed();
    }

    /// Drop the last `steps` items.
    ///
    /// Does nothing unless more than `steps` items exist, so going back
    /// never empties the trail. Going back zero steps is a no-op.
    pub fn go_back(&mut self, steps: usize) -> bool {
        if steps == 0 || self.items.len() <= steps {
            return false;
        }
        self.items.truncate(self.items.len() - steps);
        mark_last_active(&mut self.items);
        self.changed();
        true
    }

    /// Labels joined with `" / "`.
    pub fn current_path(&self) -> String {
        self.items
            .iter()
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// The active item, or the last item if none is marked active.
    pub fn current_item(&self) -> Option<&BreadcrumbItem> {
        self.items
            .iter()
            .find(|item| item.is_active())
            .or_else(|| self.items.last())
    }

    fn home_item(&self, options: &SetOptions) -> BreadcrumbItem {
        let pick = |custom: &Option<String>, fallback: &String| {
            custom.clone().unwrap_or_else(|| fallback.clone())
        };
        BreadcrumbItem::new(pick(&options.home_label, &self.settings.home_label))
            .with_href(pick(&options.home_href, &self.settings.home_href))
            .with_icon(pick(&options.home_icon, &self.settings.home_icon))
            .with_value(HOME_VALUE)
    }

    fn changed(&mut self) {
        let event = TrailEvent::Changed {
            items: self.items.clone(),
        };
        self.subscribers.notify(&event);
    }
}

/// Compress `items` to the first item, an ellipsis and the last `max - 2`
/// items when longer than `max`.
///
/// For `max <= 2` the tail is empty and the result is first + ellipsis,
/// which can exceed `max`. This differs from a negative-slice tail, where
/// `max == 2` would keep every remaining item and `max == 1` all but one.
fn truncate(items: Vec<BreadcrumbItem>, max: usize) -> Vec<BreadcrumbItem> {
    if items.len() <= max {
        return items;
    }

    let tail = max.saturating_sub(2).min(items.len() - 1);
    let mut iter = items.into_iter();
    let mut compressed = Vec::with_capacity(tail + 2);
    compressed.extend(iter.next());
    compressed.push(BreadcrumbItem::ellipsis());

    let rest: Vec<_> = iter.collect();
    let skip = rest.len() - tail;
    compressed.extend(rest.into_iter().skip(skip));
    compressed
}
