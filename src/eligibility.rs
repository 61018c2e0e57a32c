//! Eligible-set computation.
//!
//! A pure scan over the item universe applying the per-category exclusion
//! rules, plus the retry-once policy used when every item is in cooldown.
//! Votes never weight probability here; they only decide which exclusion
//! rule applies to an item.

use crate::cooldown::{Category, CooldownPolicy, CooldownTracker};
use crate::vote::VoteStore;

/// Can `id` be shown right now, given its vote and the current windows?
///
/// Exclusion table, evaluated by the item's vote:
/// - Negative: excluded while blocked, or while in the negative window.
/// - Positive/Neutral: excluded only while in their window; a disabled
///   cooldown never excludes.
#[must_use]
pub fn is_eligible(id: &str, votes: &VoteStore, cooldowns: &CooldownTracker) -> bool {
    let category = Category::from(votes.get(id));
    match cooldowns.policy(category) {
        CooldownPolicy::Blocked => false,
        CooldownPolicy::Disabled => true,
        CooldownPolicy::Window(_) => !cooldowns.contains(category, id),
    }
}

/// The subset of `universe` selectable by the next pick.
///
/// Pure with respect to its inputs; `O(universe)` with `O(window capacity)`
/// membership tests.
#[must_use]
pub fn eligible_items<'a>(
    universe: &'a [String],
    votes: &VoteStore,
    cooldowns: &CooldownTracker,
) -> Vec<&'a str> {
    universe
        .iter()
        .map(String::as_str)
        .filter(|id| is_eligible(id, votes, cooldowns))
        .collect()
}

/// Eligible-set computation with the exhaustion retry applied.
///
/// If the first pass comes up empty, every recency window is cleared once,
/// all three together, discarding all recency memory at once, and the scan
/// runs again. An empty result after the retry means no candidate exists:
/// the universe is empty or every item is permanently blocked.
pub fn select_candidates<'a>(
    universe: &'a [String],
    votes: &VoteStore,
    cooldowns: &mut CooldownTracker,
) -> Vec<&'a str> {
    let candidates = eligible_items(universe, votes, cooldowns);
    if !candidates.is_empty() {
        return candidates;
    }

    log::debug!("Eligible set exhausted; clearing all recency windows once.");
    cooldowns.clear_all();
    eligible_items(universe, votes, cooldowns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::Vote;

    fn universe(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_blocked_negative_is_always_excluded() {
        let items = universe(&["a", "b", "c"]);
        let mut votes = VoteStore::new();
        votes.set_negative("b");
        let cooldowns = CooldownTracker::new(0, 0, 0);

        let eligible = eligible_items(&items, &votes, &cooldowns);
        assert_eq!(eligible, vec!["a", "c"]);
    }

    #[test]
    fn test_negative_with_window_cools_down_instead_of_blocking() {
        let mut votes = VoteStore::new();
        votes.set_negative("b");
        let mut cooldowns = CooldownTracker::new(0, 0, 2);

        assert!(is_eligible("b", &votes, &cooldowns));
        cooldowns.record(Category::Negative, "b");
        assert!(!is_eligible("b", &votes, &cooldowns));
    }

    #[test]
    fn test_disabled_cooldown_never_excludes() {
        let items = universe(&["a"]);
        let votes = VoteStore::new();
        // Neutral capacity 0: disabled, repeats allowed immediately.
        let cooldowns = CooldownTracker::new(0, 0, 0);

        assert_eq!(eligible_items(&items, &votes, &cooldowns), vec!["a"]);
    }

    #[test]
    fn test_window_membership_excludes_by_vote_category() {
        let items = universe(&["a", "b"]);
        let mut votes = VoteStore::new();
        votes.set_positive("a");
        let mut cooldowns = CooldownTracker::new(2, 2, 0);

        cooldowns.record(Category::Positive, "a");
        // "b" is neutral: presence in the positive window would not matter.
        cooldowns.record(Category::Positive, "b");

        let eligible = eligible_items(&items, &votes, &cooldowns);
        assert_eq!(eligible, vec!["b"]);
    }

    #[test]
    fn test_clearing_windows_only_grows_eligible_set() {
        let items = universe(&["a", "b", "c"]);
        let mut votes = VoteStore::new();
        votes.set_positive("a");
        let mut cooldowns = CooldownTracker::new(1, 2, 0);
        cooldowns.record(Category::Positive, "a");
        cooldowns.record(Category::Neutral, "b");

        let before = eligible_items(&items, &votes, &cooldowns);
        cooldowns.clear_all();
        let after = eligible_items(&items, &votes, &cooldowns);

        assert!(after.len() >= before.len());
        for id in before {
            assert!(after.contains(&id));
        }
    }

    #[test]
    fn test_retry_clears_windows_once_and_recovers() {
        let items = universe(&["a", "b"]);
        let votes = VoteStore::new();
        let mut cooldowns = CooldownTracker::new(0, 2, 0);
        cooldowns.record(Category::Neutral, "a");
        cooldowns.record(Category::Neutral, "b");

        assert!(eligible_items(&items, &votes, &cooldowns).is_empty());
        let candidates = select_candidates(&items, &votes, &mut cooldowns);
        assert_eq!(candidates.len(), 2, "Retry must recover the full universe");
        assert_eq!(cooldowns.len(Category::Neutral), 0);
    }

    #[test]
    fn test_retry_cannot_recover_blocked_items() {
        let items = universe(&["a"]);
        let mut votes = VoteStore::new();
        votes.set_negative("a");
        let mut cooldowns = CooldownTracker::new(0, 0, 0);

        let candidates = select_candidates(&items, &votes, &mut cooldowns);
        assert!(candidates.is_empty(), "Permanent block survives the retry");
    }

    #[test]
    fn test_empty_universe_yields_no_candidates() {
        let items: Vec<String> = Vec::new();
        let votes = VoteStore::new();
        let mut cooldowns = CooldownTracker::new(5, 20, 0);

        assert!(select_candidates(&items, &votes, &mut cooldowns).is_empty());
    }
}
