//! The link store: old/new record mapping with undo/redo.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use super::history::SnapshotHistory;
use super::pair::LinkedPair;
use crate::config::LinkSettings;
use crate::error::{Result, WaypointError};
use crate::key::ItemKey;
use crate::reactive::{Subscribers, Subscription};

/// What kind of change a [`LinkEvent`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChange {
    Linked,
    Unlinked,
    Cleared,
    ConfidenceUpdated,
    Undone,
    Redone,
    Imported,
    Reset,
}

/// Change notification carrying a copy of the live pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEvent {
    pub change: LinkChange,
    pub pairs: Vec<LinkedPair>,
}

/// Derived statistics over the live pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkStats {
    pub total_links: usize,
    pub average_confidence: f64,
    pub high_confidence: usize,
    pub low_confidence: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_len: usize,
}

/// Bidirectional mapping between two record sets with linear undo/redo.
///
/// Every mutation records a snapshot of the full mapping. The history
/// starts with the empty mapping, so the first mutation can be undone.
///
/// # Invariants
///
/// 1. At most one pair exists per `(old_id, new_id)`.
/// 2. After every operation the snapshot under the history cursor equals
///    the live pairs.
#[derive(Debug)]
pub struct LinkHistoryStore {
    pairs: Vec<LinkedPair>,
    history: SnapshotHistory<Vec<LinkedPair>>,
    settings: LinkSettings,
    subscribers: Subscribers<LinkEvent>,
}

impl Default for LinkHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkHistoryStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::with_settings(LinkSettings::default())
    }

    /// Create an empty store with the given limits and thresholds.
    pub fn with_settings(settings: LinkSettings) -> Self {
        Self {
            pairs: Vec::new(),
            history: SnapshotHistory::new(Vec::new(), settings.history_limit),
            settings,
            subscribers: Subscribers::new(),
        }
    }

    /// Read-only view of the live pairs.
    pub fn pairs(&self) -> &[LinkedPair] {
        &self.pairs
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    /// Register a callback invoked after every change.
    pub fn subscribe(&mut self, callback: impl Fn(&LinkEvent) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    // --- Mutations ---

    /// Link `old_id` to `new_id`, or update the existing link between them.
    ///
    /// Always records a history entry, even if nothing observable changed.
    pub fn add_link(
        &mut self,
        old_id: impl Into<ItemKey>,
        new_id: impl Into<ItemKey>,
        confidence: Option<f64>,
    ) {
        let old_id = old_id.into();
        let new_id = new_id.into();
        let now = Some(Utc::now());

        match self.position(&old_id, &new_id) {
            Some(index) => {
                let pair = &mut self.pairs[index];
                pair.confidence = confidence;
                pair.created_at = now;
                debug!("Updated link {} -> {}", old_id, new_id);
            }
            None => {
                debug!("Linked {} -> {}", old_id, new_id);
                self.pairs.push(LinkedPair {
                    old_id,
                    new_id,
                    confidence,
                    created_at: now,
                });
            }
        }

        self.commit(LinkChange::Linked);
    }

    /// Add several links, one history entry per link.
    pub fn add_links(&mut self, pairs: impl IntoIterator<Item = LinkedPair>) {
        for pair in pairs {
            self.add_link(pair.old_id, pair.new_id, pair.confidence);
        }
    }

    /// Remove the link between `old_id` and `new_id`.
    ///
    /// Returns whether a link was removed. History is only recorded on removal.
    pub fn remove_link(&mut self, old_id: &ItemKey, new_id: &ItemKey) -> bool {
        let Some(index) = self.position(old_id, new_id) else {
            return false;
        };
        self.pairs.remove(index);
        debug!("Unlinked {} -> {}", old_id, new_id);
        self.commit(LinkChange::Unlinked);
        true
    }

    /// Remove every link.
    pub fn clear_links(&mut self) {
        self.pairs.clear();
        self.commit(LinkChange::Cleared);
    }

    /// Change the confidence of an existing link.
    pub fn update_confidence(&mut self, old_id: &ItemKey, new_id: &ItemKey, confidence: f64) -> bool {
        let Some(index) = self.position(old_id, new_id) else {
            return false;
        };
        self.pairs[index].confidence = Some(confidence);
        self.commit(LinkChange::ConfidenceUpdated);
        true
    }

    /// Restore the previous snapshot.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.pairs = snapshot;
                self.notify(LinkChange::Undone);
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.pairs = snapshot;
                self.notify(LinkChange::Redone);
                true
            }
            None => false,
        }
    }

    /// Drop all links and all history.
    pub fn reset(&mut self) {
        self.pairs.clear();
        self.history.reset(Vec::new());
        self.notify(LinkChange::Reset);
    }

    // --- Serialization ---

    /// Serialize the live pairs as a pretty-printed JSON array.
    pub fn export_links(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.pairs).map_err(|e| WaypointError::Other(e.into()))
    }

    /// Replace the live pairs with the serialized ones.
    ///
    /// Duplicate `(oldId, newId)` entries collapse into one, the later entry
    /// winning. Returns the number of pairs now held.
    ///
    /// # Errors
    ///
    /// Returns `LinkImportError` for malformed input; state is left unchanged.
    pub fn try_import_links(&mut self, serialized: &str) -> Result<usize> {
        let parsed: Vec<LinkedPair> =
            serde_json::from_str(serialized).map_err(|e| WaypointError::LinkImportError {
                message: e.to_string(),
            })?;

        let mut pairs: Vec<LinkedPair> = Vec::with_capacity(parsed.len());
        for pair in parsed {
            match pairs
                .iter_mut()
                .find(|existing| existing.matches(&pair.old_id, &pair.new_id))
            {
                Some(existing) => *existing = pair,
                None => pairs.push(pair),
            }
        }

        self.pairs = pairs;
        debug!("Imported {} links", self.pairs.len());
        self.commit(LinkChange::Imported);
        Ok(self.pairs.len())
    }

    /// Import, logging and ignoring malformed input.
    ///
    /// Returns whether the import was applied.
    pub fn import_links(&mut self, serialized: &str) -> bool {
        match self.try_import_links(serialized) {
            Ok(_) => true,
            Err(e) => {
                warn!("Ignoring links import: {}", e);
                false
            }
        }
    }

    // --- Queries ---

    pub fn link_by_old_id(&self, old_id: &ItemKey) -> Option<&LinkedPair> {
        self.pairs.iter().find(|pair| pair.old_id == *old_id)
    }

    pub fn link_by_new_id(&self, new_id: &ItemKey) -> Option<&LinkedPair> {
        self.pairs.iter().find(|pair| pair.new_id == *new_id)
    }

    pub fn is_old_item_linked(&self, old_id: &ItemKey) -> bool {
        self.link_by_old_id(old_id).is_some()
    }

    pub fn is_new_item_linked(&self, new_id: &ItemKey) -> bool {
        self.link_by_new_id(new_id).is_some()
    }

    pub fn total_links(&self) -> usize {
        self.pairs.len()
    }

    /// Mean confidence, counting missing scores as zero. Zero when empty.
    pub fn average_confidence(&self) -> f64 {
        if self.pairs.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.pairs.iter().map(LinkedPair::score).sum();
        sum / self.pairs.len() as f64
    }

    /// Links scoring at or above the high threshold.
    pub fn high_confidence_links(&self) -> Vec<&LinkedPair> {
        let threshold = self.settings.high_confidence;
        self.pairs.iter().filter(|p| p.score() >= threshold).collect()
    }

    /// Links scoring below the low threshold, unscored links included.
    pub fn low_confidence_links(&self) -> Vec<&LinkedPair> {
        let threshold = self.settings.low_confidence;
        self.pairs.iter().filter(|p| p.score() < threshold).collect()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_index(&self) -> usize {
        self.history.current_index()
    }

    /// All derived values at once.
    pub fn stats(&self) -> LinkStats {
        LinkStats {
            total_links: self.total_links(),
            average_confidence: self.average_confidence(),
            high_confidence: self.high_confidence_links().len(),
            low_confidence: self.low_confidence_links().len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            history_len: self.history_len(),
        }
    }

    fn position(&self, old_id: &ItemKey, new_id: &ItemKey) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.matches(old_id, new_id))
    }

    fn commit(&mut self, change: LinkChange) {
        self.history.push(self.pairs.clone());
        self.notify(change);
    }

    fn notify(&mut self, change: LinkChange) {
        let event = LinkEvent {
            change,
            pairs: self.pairs.clone(),
        };
        self.subscribers.notify(&event);
    }
}
