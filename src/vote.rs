//! Per-item preference votes.
//!
//! Votes only filter eligibility; they never weight selection probability.
//! The store is sparse: `Neutral` is the implicit default and is represented
//! by the absence of an entry, so clearing a vote removes it rather than
//! writing `Neutral` back.

use std::collections::HashMap;

/// A user's preference for a single item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    /// Item the user wants to see more often (👍).
    Positive,
    /// No explicit preference (⚪). Never stored in the map.
    #[default]
    Neutral,
    /// Item the user wants to see rarely or never (👎).
    Negative,
}

impl Vote {
    /// Display symbol matching the on-screen vote buttons.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Positive => "👍",
            Self::Neutral => "⚪",
            Self::Negative => "👎",
        }
    }

    /// Numeric encoding used on the persistence boundary: `1`, `0`, `-1`.
    #[must_use]
    pub const fn as_score(self) -> i64 {
        match self {
            Self::Positive => 1,
            Self::Neutral => 0,
            Self::Negative => -1,
        }
    }

    /// Decode the numeric persistence encoding. Anything other than `1` or
    /// `-1` is treated as no vote, keeping import tolerant of junk values.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        match score {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Sparse mapping from item identifier to non-neutral vote.
///
/// All operations are total; there are no error conditions here. Item
/// identifiers are opaque strings compared by exact equality.
#[derive(Debug, Default, Clone)]
pub struct VoteStore {
    votes: HashMap<String, Vote>,
}

impl VoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_positive(&mut self, id: &str) {
        self.votes.insert(id.to_string(), Vote::Positive);
    }

    pub fn set_negative(&mut self, id: &str) {
        self.votes.insert(id.to_string(), Vote::Negative);
    }

    /// Return the item to neutral by dropping its entry.
    pub fn clear(&mut self, id: &str) {
        self.votes.remove(id);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Vote {
        self.votes.get(id).copied().unwrap_or_default()
    }

    /// Toggle an item's vote: voting the same way twice returns the item to
    /// neutral, anything else overwrites. `Neutral` acts as a plain clear so
    /// the operation stays total.
    pub fn toggle(&mut self, id: &str, vote: Vote) {
        if self.get(id) == vote || vote == Vote::Neutral {
            self.clear(id);
        } else {
            self.votes.insert(id.to_string(), vote);
        }
    }

    /// Number of stored entries carrying `vote`. Always 0 for `Neutral`.
    #[must_use]
    pub fn count(&self, vote: Vote) -> usize {
        self.votes.values().filter(|&&v| v == vote).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Iterate over all stored (non-neutral) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vote)> {
        self.votes.iter().map(|(id, &v)| (id.as_str(), v))
    }

    /// Drop every vote.
    pub fn reset(&mut self) {
        self.votes.clear();
    }

    /// Drop only the votes equal to `vote`. Resetting `Neutral` is a no-op
    /// since neutral items were never stored.
    pub fn reset_category(&mut self, vote: Vote) {
        self.votes.retain(|_, v| *v != vote);
    }

    /// Replace the whole store from decoded persistence entries.
    pub fn replace_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Vote)>,
    {
        self.votes = entries
            .into_iter()
            .filter(|(_, v)| *v != Vote::Neutral)
            .collect();
    }
}
