//! The navigation engine.
//!
//! One explicitly owned [`NavigationEngine`] per session composes the vote
//! store, the cooldown tracker and the history log over an updatable item
//! universe. Every operation is synchronous and in-memory; the only
//! non-determinism is the single uniform random draw in
//! [`pick_next`](NavigationEngine::pick_next). When embedded in a
//! multi-threaded host, callers must provide their own single-writer
//! synchronization; there is no internal locking and no global instance.

use crate::cooldown::{Category, CooldownPolicy, CooldownTracker};
use crate::eligibility;
use crate::history::HistoryLog;
use crate::persist::Snapshot;
use crate::vote::{Vote, VoteStore};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::BTreeMap;

/// Items before a positively voted item may repeat.
pub const DEFAULT_POSITIVE_COOLDOWN: usize = 5;
/// Items before an unvoted item may repeat.
pub const DEFAULT_NEUTRAL_COOLDOWN: usize = 20;
/// Zero blocks negatively voted items permanently.
pub const DEFAULT_NEGATIVE_COOLDOWN: usize = 0;
/// Default bound on the back/forward history.
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Initial engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub positive_cooldown: usize,
    pub neutral_cooldown: usize,
    pub negative_cooldown: usize,
    pub max_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            positive_cooldown: DEFAULT_POSITIVE_COOLDOWN,
            neutral_cooldown: DEFAULT_NEUTRAL_COOLDOWN,
            negative_cooldown: DEFAULT_NEGATIVE_COOLDOWN,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

/// Per-category "currently in cooldown" counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CooldownCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Aggregate engine state for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    pub total_items: usize,
    pub positive_voted: usize,
    pub neutral_voted: usize,
    pub negative_voted: usize,
    /// Size of the eligible set for the next pick (no retry applied).
    pub eligible_now: usize,
    pub positive_cooldown: usize,
    pub neutral_cooldown: usize,
    pub negative_cooldown: usize,
    pub in_cooldown: CooldownCounts,
    pub history_length: usize,
    /// 1-based position of the current history entry; 0 when empty.
    pub history_position: usize,
}

/// Everything a display layer wants to know about one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub vote: Vote,
    /// Effective cooldown capacity for this item's vote category.
    pub cooldown: usize,
    /// Whether the item currently sits in its category's recency window.
    pub in_cooldown: bool,
    /// Negative vote with negative cooldown zero: never selectable.
    pub blocked: bool,
    /// Member of the eligible set right now.
    pub selectable: bool,
}

/// Selection, cooldown and history engine over a refreshable item universe.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    universe: Vec<String>,
    votes: VoteStore,
    cooldowns: CooldownTracker,
    history: HistoryLog,
}

impl NavigationEngine {
    /// Engine over `items` with the default configuration.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self::with_config(items, EngineConfig::default())
    }

    /// Engine over `items` with explicit cooldown capacities and history
    /// bound.
    #[must_use]
    pub fn with_config(items: Vec<String>, config: EngineConfig) -> Self {
        Self {
            universe: items,
            votes: VoteStore::new(),
            cooldowns: CooldownTracker::new(
                config.positive_cooldown,
                config.neutral_cooldown,
                config.negative_cooldown,
            ),
            history: HistoryLog::new(config.max_history),
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Pick the next item to present.
    ///
    /// Computes the eligible set (clearing all recency windows once if it
    /// comes up empty), draws uniformly at random among the survivors,
    /// appends the choice to the history and records it into its category's
    /// recency window. Votes only filter eligibility; they never bias the
    /// draw.
    ///
    /// Returns `None` when no candidate exists even after the retry, which
    /// happens only for an empty universe or when every item is permanently
    /// blocked.
    pub fn pick_next(&mut self) -> Option<String> {
        let choice = {
            let candidates =
                eligibility::select_candidates(&self.universe, &self.votes, &mut self.cooldowns);
            candidates.choose(&mut thread_rng()).map(ToString::to_string)
        };

        let Some(choice) = choice else {
            log::info!("No candidate available: universe empty or fully blocked.");
            return None;
        };

        self.history.append(&choice);

        let category = Category::from(self.votes.get(&choice));
        // Disabled/blocked categories keep no window, so there is nothing
        // to record.
        if let CooldownPolicy::Window(_) = self.cooldowns.policy(category) {
            self.cooldowns.record(category, &choice);
        }

        log::debug!("Picked {choice} ({category:?}).");
        Some(choice)
    }

    // ------------------------------------------------------------------
    // History navigation (never touches votes or windows)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.history.current()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn go_back(&mut self) -> Option<&str> {
        self.history.go_back()
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        self.history.go_forward()
    }

    /// The history entry ahead of the current position, for preloading.
    #[must_use]
    pub fn peek_forward(&self) -> Option<&str> {
        self.history.peek_forward()
    }

    // ------------------------------------------------------------------
    // Votes (never touch history or windows)
    // ------------------------------------------------------------------

    pub fn vote_positive(&mut self, id: &str) {
        self.votes.set_positive(id);
    }

    pub fn vote_negative(&mut self, id: &str) {
        self.votes.set_negative(id);
    }

    pub fn clear_vote(&mut self, id: &str) {
        self.votes.clear(id);
    }

    pub fn toggle_vote(&mut self, id: &str, vote: Vote) {
        self.votes.toggle(id, vote);
    }

    #[must_use]
    pub fn get_vote(&self, id: &str) -> Vote {
        self.votes.get(id)
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the positive cooldown capacity; negative inputs clamp to zero.
    pub fn set_positive_cooldown(&mut self, capacity: i64) {
        self.cooldowns
            .set_capacity(Category::Positive, clamp_capacity(capacity));
    }

    /// Set the neutral cooldown capacity; negative inputs clamp to zero.
    pub fn set_neutral_cooldown(&mut self, capacity: i64) {
        self.cooldowns
            .set_capacity(Category::Neutral, clamp_capacity(capacity));
    }

    /// Set the negative cooldown capacity; negative inputs clamp to zero.
    /// Zero means permanently blocked, not disabled.
    pub fn set_negative_cooldown(&mut self, capacity: i64) {
        self.cooldowns
            .set_capacity(Category::Negative, clamp_capacity(capacity));
    }

    /// Set the history bound (clamped to ≥ 1, applied lazily on the next
    /// pick).
    pub fn set_max_history(&mut self, max_history: i64) {
        self.history
            .set_max_len(usize::try_from(max_history.max(1)).unwrap_or(1));
    }

    /// Effective cooldown capacity for an item, by its current vote.
    #[must_use]
    pub fn cooldown_for(&self, id: &str) -> usize {
        self.cooldowns.capacity(Category::from(self.votes.get(id)))
    }

    /// Replace the candidate set. Votes, windows and history are retained:
    /// an item no longer in the universe simply stops appearing while its
    /// entries stay inert.
    pub fn update_universe(&mut self, items: Vec<String>) {
        log::info!("Universe updated: {} items.", items.len());
        self.universe = items;
    }

    #[must_use]
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Aggregate counts for status displays.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        let mut positive_voted = 0;
        let mut negative_voted = 0;
        let mut in_cooldown = CooldownCounts::default();

        for id in &self.universe {
            let vote = self.votes.get(id);
            let category = Category::from(vote);
            match vote {
                Vote::Positive => positive_voted += 1,
                Vote::Negative => negative_voted += 1,
                Vote::Neutral => {}
            }
            if self.cooldowns.contains(category, id) {
                match category {
                    Category::Positive => in_cooldown.positive += 1,
                    Category::Neutral => in_cooldown.neutral += 1,
                    Category::Negative => in_cooldown.negative += 1,
                }
            }
        }

        EngineStats {
            total_items: self.universe.len(),
            positive_voted,
            neutral_voted: self.universe.len() - positive_voted - negative_voted,
            negative_voted,
            eligible_now: eligibility::eligible_items(&self.universe, &self.votes, &self.cooldowns)
                .len(),
            positive_cooldown: self.cooldowns.capacity(Category::Positive),
            neutral_cooldown: self.cooldowns.capacity(Category::Neutral),
            negative_cooldown: self.cooldowns.capacity(Category::Negative),
            in_cooldown,
            history_length: self.history.len(),
            history_position: self.history.position().map_or(0, |pos| pos + 1),
        }
    }

    /// Everything known about one item.
    #[must_use]
    pub fn item_info(&self, id: &str) -> ItemInfo {
        let vote = self.votes.get(id);
        let category = Category::from(vote);
        let policy = self.cooldowns.policy(category);
        let in_universe = self.universe.iter().any(|item| item == id);

        ItemInfo {
            vote,
            cooldown: self.cooldowns.capacity(category),
            in_cooldown: self.cooldowns.contains(category, id),
            blocked: policy == CooldownPolicy::Blocked,
            selectable: in_universe && eligibility::is_eligible(id, &self.votes, &self.cooldowns),
        }
    }

    // ------------------------------------------------------------------
    // Persistence boundary
    // ------------------------------------------------------------------

    /// Export votes and configuration. History and windows are transient
    /// and deliberately absent from the snapshot.
    #[must_use]
    pub fn export(&self) -> Snapshot {
        let votes: BTreeMap<String, i64> = self
            .votes
            .iter()
            .map(|(id, vote)| (id.to_string(), vote.as_score()))
            .collect();

        Snapshot {
            votes: Some(votes),
            positive_cooldown: int_capacity(self.cooldowns.capacity(Category::Positive)),
            neutral_cooldown: int_capacity(self.cooldowns.capacity(Category::Neutral)),
            negative_cooldown: int_capacity(self.cooldowns.capacity(Category::Negative)),
            max_history: int_capacity(self.history.max_len()),
        }
    }

    /// Apply a snapshot. Only the fields present are applied; absent fields
    /// leave the current state unchanged. Vote values other than `1`/`-1`
    /// are dropped, out-of-range capacities are clamped.
    pub fn import(&mut self, snapshot: &Snapshot) {
        if let Some(votes) = &snapshot.votes {
            self.votes.replace_all(
                votes
                    .iter()
                    .map(|(id, &score)| (id.clone(), Vote::from_score(score))),
            );
        }
        if let Some(capacity) = snapshot.positive_cooldown {
            self.set_positive_cooldown(capacity);
        }
        if let Some(capacity) = snapshot.neutral_cooldown {
            self.set_neutral_cooldown(capacity);
        }
        if let Some(capacity) = snapshot.negative_cooldown {
            self.set_negative_cooldown(capacity);
        }
        if let Some(max_history) = snapshot.max_history {
            self.set_max_history(max_history);
        }
    }

    // ------------------------------------------------------------------
    // Resets
    // ------------------------------------------------------------------

    /// Forget the presentation history and all recency memory.
    pub fn reset_history(&mut self) {
        self.history.reset();
        self.cooldowns.clear_all();
    }

    /// Drop every vote.
    pub fn reset_votes(&mut self) {
        self.votes.reset();
    }

    /// Drop all positive votes and the positive recency window.
    pub fn reset_positive_votes(&mut self) {
        self.votes.reset_category(Vote::Positive);
        self.cooldowns.clear(Category::Positive);
    }

    /// Drop all negative votes and the negative recency window.
    pub fn reset_negative_votes(&mut self) {
        self.votes.reset_category(Vote::Negative);
        self.cooldowns.clear(Category::Negative);
    }

    /// Neutral votes are never stored, so only the neutral window needs
    /// clearing.
    pub fn reset_neutral_votes(&mut self) {
        self.cooldowns.clear(Category::Neutral);
    }

    /// Full reset: history, windows and votes.
    pub fn reset_all(&mut self) {
        self.reset_history();
        self.reset_votes();
    }
}

fn clamp_capacity(capacity: i64) -> usize {
    usize::try_from(capacity.max(0)).unwrap_or(0)
}

fn int_capacity(capacity: usize) -> Option<i64> {
    Some(i64::try_from(capacity).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    fn engine(ids: &[&str], config: EngineConfig) -> NavigationEngine {
        NavigationEngine::with_config(universe(ids), config)
    }

    #[test]
    fn test_pick_appends_to_history() {
        let mut engine = NavigationEngine::new(universe(&["a", "b", "c"]));
        let picked = engine.pick_next().expect("non-empty universe");

        assert_eq!(engine.current(), Some(picked.as_str()));
        assert_eq!(engine.stats().history_length, 1);
        assert_eq!(engine.stats().history_position, 1);
    }

    #[test]
    fn test_empty_universe_reports_no_candidate() {
        let mut engine = NavigationEngine::new(Vec::new());
        assert_eq!(engine.pick_next(), None);
        assert_eq!(engine.current(), None);
    }

    #[test]
    fn test_blocked_negative_never_picked() {
        let mut engine = engine(
            &["a", "b", "c", "d", "e"],
            EngineConfig {
                positive_cooldown: 0,
                neutral_cooldown: 0,
                negative_cooldown: 0,
                max_history: 100,
            },
        );
        engine.vote_negative("c");

        for _ in 0..200 {
            let picked = engine.pick_next().expect("four items remain eligible");
            assert_ne!(picked, "c");
        }
        assert_eq!(engine.stats().eligible_now, 4);
    }

    #[test]
    fn test_positive_cooldown_enforces_spacing() {
        // Positive items with capacity 2 must see two other distinct items
        // picked before they can repeat.
        let mut engine = engine(
            &["a", "b", "c", "d"],
            EngineConfig {
                positive_cooldown: 2,
                neutral_cooldown: 0,
                negative_cooldown: 0,
                max_history: 1000,
            },
        );
        engine.vote_positive("a");
        engine.vote_positive("b");
        engine.vote_positive("c");

        let picks: Vec<String> = (0..300).filter_map(|_| engine.pick_next()).collect();
        assert_eq!(picks.len(), 300);

        for item in ["a", "b", "c"] {
            let occurrences: Vec<usize> = picks
                .iter()
                .enumerate()
                .filter(|(_, p)| p.as_str() == item)
                .map(|(i, _)| i)
                .collect();
            for pair in occurrences.windows(2) {
                let distinct: std::collections::HashSet<&String> =
                    picks[pair[0] + 1..pair[1]].iter().collect();
                assert!(
                    distinct.len() >= 2,
                    "{item} repeated after only {} distinct picks",
                    distinct.len()
                );
            }
        }
    }

    #[test]
    fn test_exhaustion_retry_recovers() {
        // One neutral item, neutral capacity 1: after the first pick the
        // eligible set is empty, so the retry must clear the window and
        // re-offer the same item instead of failing.
        let mut engine = engine(
            &["only"],
            EngineConfig {
                positive_cooldown: 0,
                neutral_cooldown: 1,
                negative_cooldown: 0,
                max_history: 10,
            },
        );

        assert_eq!(engine.pick_next().as_deref(), Some("only"));
        assert_eq!(engine.stats().eligible_now, 0);
        assert_eq!(engine.pick_next().as_deref(), Some("only"));
    }

    #[test]
    fn test_history_bound_four_picks_keep_three() {
        let mut engine = engine(
            &["a", "b", "c", "d", "e", "f", "g", "h"],
            EngineConfig {
                positive_cooldown: 0,
                neutral_cooldown: 0,
                negative_cooldown: 0,
                max_history: 3,
            },
        );

        for _ in 0..4 {
            engine.pick_next().expect("universe non-empty");
        }

        let stats = engine.stats();
        assert_eq!(stats.history_length, 3);
        assert_eq!(stats.history_position, 3);

        // Two back steps are possible, the third is refused: the oldest
        // pick fell off the front.
        assert!(engine.go_back().is_some());
        assert!(engine.go_back().is_some());
        assert!(engine.go_back().is_none());
    }

    #[test]
    fn test_pick_from_mid_history_discards_forward_branch() {
        let mut engine = NavigationEngine::new(universe(&["a", "b", "c", "d", "e"]));
        for _ in 0..4 {
            engine.pick_next().unwrap();
        }
        engine.go_back();
        engine.go_back();
        assert!(engine.can_go_forward());

        engine.pick_next().unwrap();
        assert!(!engine.can_go_forward());
        assert_eq!(engine.stats().history_length, 3);
    }

    #[test]
    fn test_manual_navigation_leaves_windows_alone() {
        let mut engine = engine(
            &["a", "b", "c"],
            EngineConfig {
                positive_cooldown: 0,
                neutral_cooldown: 2,
                negative_cooldown: 0,
                max_history: 100,
            },
        );
        engine.pick_next().unwrap();
        engine.pick_next().unwrap();
        let stats_before = engine.stats();

        engine.go_back();
        engine.go_forward();

        let stats_after = engine.stats();
        assert_eq!(stats_before.in_cooldown, stats_after.in_cooldown);
        assert_eq!(stats_before.eligible_now, stats_after.eligible_now);
    }

    #[test]
    fn test_stats_counts_votes_over_universe() {
        let mut engine = NavigationEngine::new(universe(&["a", "b", "c", "d"]));
        engine.vote_positive("a");
        engine.vote_negative("b");
        // Vote on an item outside the universe: inert, not counted.
        engine.vote_positive("zz");

        let stats = engine.stats();
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.positive_voted, 1);
        assert_eq!(stats.negative_voted, 1);
        assert_eq!(stats.neutral_voted, 2);
    }

    #[test]
    fn test_item_info_reports_block_and_selectability() {
        let mut engine = engine(
            &["a", "b"],
            EngineConfig {
                positive_cooldown: 5,
                neutral_cooldown: 0,
                negative_cooldown: 0,
                max_history: 100,
            },
        );
        engine.vote_negative("a");

        let info = engine.item_info("a");
        assert_eq!(info.vote, Vote::Negative);
        assert!(info.blocked);
        assert!(!info.selectable);
        assert_eq!(info.cooldown, 0);

        let info = engine.item_info("b");
        assert!(!info.blocked);
        assert!(info.selectable);

        // Unknown items are never selectable.
        assert!(!engine.item_info("missing").selectable);
    }

    #[test]
    fn test_update_universe_retains_votes_and_history() {
        let mut engine = NavigationEngine::new(universe(&["a", "b"]));
        engine.vote_negative("a");
        engine.pick_next().unwrap();
        let history_len = engine.stats().history_length;

        engine.update_universe(universe(&["b", "c"]));
        assert_eq!(engine.get_vote("a"), Vote::Negative);
        assert_eq!(engine.stats().history_length, history_len);
        assert_eq!(engine.stats().total_items, 2);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut engine = NavigationEngine::new(universe(&["a", "b", "c"]));
        engine.vote_positive("a");
        engine.vote_negative("b");
        engine.set_positive_cooldown(7);
        engine.set_neutral_cooldown(11);
        engine.set_negative_cooldown(3);
        engine.set_max_history(42);

        let snapshot = engine.export();
        let mut fresh = NavigationEngine::new(universe(&["a", "b", "c"]));
        fresh.import(&snapshot);

        assert_eq!(fresh.get_vote("a"), Vote::Positive);
        assert_eq!(fresh.get_vote("b"), Vote::Negative);
        assert_eq!(fresh.get_vote("c"), Vote::Neutral);
        let stats = fresh.stats();
        assert_eq!(stats.positive_cooldown, 7);
        assert_eq!(stats.neutral_cooldown, 11);
        assert_eq!(stats.negative_cooldown, 3);
        assert_eq!(fresh.export(), snapshot);
    }

    #[test]
    fn test_import_is_partial() {
        let mut engine = NavigationEngine::new(universe(&["a"]));
        engine.vote_positive("a");
        engine.set_neutral_cooldown(33);

        let snapshot = Snapshot {
            positive_cooldown: Some(9),
            ..Snapshot::default()
        };
        engine.import(&snapshot);

        // Only the present field changed.
        assert_eq!(engine.stats().positive_cooldown, 9);
        assert_eq!(engine.stats().neutral_cooldown, 33);
        assert_eq!(engine.get_vote("a"), Vote::Positive);
    }

    #[test]
    fn test_import_clamps_and_filters_junk() {
        let mut engine = NavigationEngine::new(universe(&["a", "b"]));
        let mut votes = BTreeMap::new();
        votes.insert("a".to_string(), 1);
        votes.insert("b".to_string(), 99); // junk value, dropped
        let snapshot = Snapshot {
            votes: Some(votes),
            positive_cooldown: Some(-4),
            max_history: Some(-10),
            ..Snapshot::default()
        };
        engine.import(&snapshot);

        assert_eq!(engine.get_vote("a"), Vote::Positive);
        assert_eq!(engine.get_vote("b"), Vote::Neutral);
        assert_eq!(engine.stats().positive_cooldown, 0);
    }

    #[test]
    fn test_reset_positive_votes_clears_window_too() {
        let mut engine = engine(
            &["a", "b", "c"],
            EngineConfig {
                positive_cooldown: 3,
                neutral_cooldown: 0,
                negative_cooldown: 0,
                max_history: 100,
            },
        );
        engine.vote_positive("a");
        engine.vote_negative("b");
        // Force "a" into the positive window.
        while engine.pick_next().as_deref() != Some("a") {}

        engine.reset_positive_votes();
        let stats = engine.stats();
        assert_eq!(stats.positive_voted, 0);
        assert_eq!(stats.in_cooldown.positive, 0);
        // Negative vote untouched.
        assert_eq!(engine.get_vote("b"), Vote::Negative);
    }

    #[test]
    fn test_reset_all_clears_everything() {
        let mut engine = NavigationEngine::new(universe(&["a", "b"]));
        engine.vote_positive("a");
        engine.pick_next().unwrap();

        engine.reset_all();
        let stats = engine.stats();
        assert_eq!(stats.history_length, 0);
        assert_eq!(stats.history_position, 0);
        assert_eq!(stats.positive_voted, 0);
        assert_eq!(stats.in_cooldown, CooldownCounts::default());
    }
}
