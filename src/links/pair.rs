//! Linked record pairs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::ItemKey;

/// A link between a record in the old set and a record in the new set.
///
/// Serialized with camelCase keys (`oldId`, `newId`, `confidence`,
/// `createdAt`), which is the export/import wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedPair {
    pub old_id: ItemKey,
    pub new_id: ItemKey,

    /// Semantic match score in `0..=1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Set on creation and refreshed on every update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LinkedPair {
    /// Create an unscored, unstamped pair.
    pub fn new(old_id: impl Into<ItemKey>, new_id: impl Into<ItemKey>) -> Self {
        Self {
            old_id: old_id.into(),
            new_id: new_id.into(),
            confidence: None,
            created_at: None,
        }
    }

    /// Set the confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Whether this pair links exactly `old_id` and `new_id`.
    pub fn matches(&self, old_id: &ItemKey, new_id: &ItemKey) -> bool {
        self.old_id == *old_id && self.new_id == *new_id
    }

    /// Confidence with a missing score counted as zero.
    pub fn score(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_both_ids() {
        let pair = LinkedPair::new("a", 1);
        assert!(pair.matches(&ItemKey::from("a"), &ItemKey::from(1)));
        assert!(!pair.matches(&ItemKey::from("a"), &ItemKey::from("1")));
        assert!(!pair.matches(&ItemKey::from("b"), &ItemKey::from(1)));
    }

    #[test]
    fn missing_confidence_scores_zero() {
        assert_eq!(LinkedPair::new("a", "b").score(), 0.0);
        assert_eq!(LinkedPair::new("a", "b").with_confidence(0.7).score(), 0.7);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&LinkedPair::new("old-1", 2).with_confidence(0.5)).unwrap();
        assert_eq!(json, r#"{"oldId":"old-1","newId":2,"confidence":0.5}"#);
    }

    #[test]
    fn deserializes_timestamps() {
        let json = r#"{"oldId":1,"newId":2,"createdAt":"2026-01-02T03:04:05Z"}"#;
        let pair: LinkedPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.created_at.unwrap().to_rfc3339(), "2026-01-02T03:04:05+00:00");
        assert!(pair.confidence.is_none());
    }
}
