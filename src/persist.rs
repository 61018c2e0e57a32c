//! Exported/persisted engine state.
//!
//! The engine itself performs no file I/O: it produces and consumes
//! [`Snapshot`] values, and an external settings store (see [`crate::config`])
//! decides where they live. History and cooldown windows are deliberately
//! not part of this shape; they are transient and reset on reload.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed schema for the persisted payload.
///
/// Every field is optional on import: absent fields leave the current engine
/// state unchanged (partial-update semantics), unknown fields are ignored,
/// and out-of-range values are clamped when applied. Votes map item
/// identifiers to `1` (positive) or `-1` (negative); neutral entries are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Non-neutral votes, keyed by item identifier. A `BTreeMap` keeps the
    /// serialized form stable across exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<BTreeMap<String, i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_cooldown: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral_cooldown: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_cooldown: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history: Option<i64>,
}

impl Snapshot {
    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot JSON")
    }

    /// Encode as pretty-printed JSON, the format the settings store writes.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let snapshot = Snapshot::from_json("{}").expect("empty object is valid");
        assert_eq!(snapshot.votes, None);
        assert_eq!(snapshot.positive_cooldown, None);
        assert_eq!(snapshot.max_history, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"votes": {"a.jpg": 1}, "theme": "dark", "window_geometry": [0, 0]}"#;
        let snapshot = Snapshot::from_json(json).expect("unknown fields tolerated");
        let votes = snapshot.votes.expect("votes present");
        assert_eq!(votes.get("a.jpg"), Some(&1));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let mut votes = BTreeMap::new();
        votes.insert("a.jpg".to_string(), 1);
        votes.insert("b.jpg".to_string(), -1);
        let snapshot = Snapshot {
            votes: Some(votes),
            positive_cooldown: Some(5),
            neutral_cooldown: Some(20),
            negative_cooldown: Some(0),
            max_history: Some(1000),
        };

        let json = snapshot.to_json_pretty().unwrap();
        let decoded = Snapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_absent_max_history_is_not_serialized() {
        let snapshot = Snapshot {
            positive_cooldown: Some(5),
            ..Snapshot::default()
        };
        let json = snapshot.to_json_pretty().unwrap();
        assert!(!json.contains("max_history"));
        assert!(json.contains("positive_cooldown"));
    }
}
