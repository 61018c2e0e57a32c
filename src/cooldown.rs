//! Bounded recency windows, one per vote category.
//!
//! A window records the most recently presented items of its category;
//! membership means "currently in cooldown". Capacity zero carries an
//! asymmetric meaning (disabled for positive/neutral, permanent block for
//! negative) which is made explicit through [`CooldownPolicy`] instead of
//! re-deriving it from the raw capacity at every call site.

use crate::vote::Vote;
use std::collections::VecDeque;

/// Vote category a recency window belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl From<Vote> for Category {
    fn from(vote: Vote) -> Self {
        match vote {
            Vote::Positive => Self::Positive,
            Vote::Neutral => Self::Neutral,
            Vote::Negative => Self::Negative,
        }
    }
}

/// Effective cooldown behavior of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownPolicy {
    /// No cooldown: items of this category may repeat immediately.
    /// Only positive/neutral reach this state (capacity 0).
    Disabled,
    /// Items of this category are never selectable. Only the negative
    /// category reaches this state (capacity 0).
    Blocked,
    /// Items are ineligible for the next `n` distinct selections after
    /// being shown.
    Window(usize),
}

/// Ordered, size-bounded record of recently shown item identifiers.
#[derive(Debug, Default, Clone)]
struct RecencyWindow {
    capacity: usize,
    entries: VecDeque<String>,
}

impl RecencyWindow {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Resize, preserving the most recently recorded `capacity` entries.
    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }

    /// Append `id`, evicting the oldest entry once at capacity.
    /// No-op at capacity zero.
    fn record(&mut self, id: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(id.to_string());
    }

    fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry == id)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Three independently configurable recency windows.
#[derive(Debug, Clone)]
pub struct CooldownTracker {
    positive: RecencyWindow,
    neutral: RecencyWindow,
    negative: RecencyWindow,
}

impl CooldownTracker {
    /// Build a tracker with per-category capacities.
    #[must_use]
    pub fn new(positive: usize, neutral: usize, negative: usize) -> Self {
        Self {
            positive: RecencyWindow::with_capacity(positive),
            neutral: RecencyWindow::with_capacity(neutral),
            negative: RecencyWindow::with_capacity(negative),
        }
    }

    fn window(&self, category: Category) -> &RecencyWindow {
        match category {
            Category::Positive => &self.positive,
            Category::Neutral => &self.neutral,
            Category::Negative => &self.negative,
        }
    }

    fn window_mut(&mut self, category: Category) -> &mut RecencyWindow {
        match category {
            Category::Positive => &mut self.positive,
            Category::Neutral => &mut self.neutral,
            Category::Negative => &mut self.negative,
        }
    }

    /// The configured capacity of a category's window.
    #[must_use]
    pub fn capacity(&self, category: Category) -> usize {
        self.window(category).capacity
    }

    /// Effective policy for a category, resolving the asymmetric meaning of
    /// capacity zero.
    #[must_use]
    pub fn policy(&self, category: Category) -> CooldownPolicy {
        match (category, self.capacity(category)) {
            (Category::Negative, 0) => CooldownPolicy::Blocked,
            (_, 0) => CooldownPolicy::Disabled,
            (_, n) => CooldownPolicy::Window(n),
        }
    }

    /// Resize a window, keeping only its most recent `capacity` entries.
    /// Resizing to zero empties the window; never errors.
    pub fn set_capacity(&mut self, category: Category, capacity: usize) {
        log::trace!("Resizing {category:?} cooldown window to {capacity}.");
        self.window_mut(category).set_capacity(capacity);
    }

    /// Record a freshly shown item into its category window. No-op for
    /// zero-capacity windows, including the blocked negative case: blocked
    /// items need no per-item tracking.
    pub fn record(&mut self, category: Category, id: &str) {
        self.window_mut(category).record(id);
    }

    /// Is `id` currently in cooldown for this category?
    #[must_use]
    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.window(category).contains(id)
    }

    /// Number of entries currently held in a category window.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.window(category).len()
    }

    /// Empty one window without changing its capacity.
    pub fn clear(&mut self, category: Category) {
        self.window_mut(category).clear();
    }

    /// Empty every window at once. Used by the exhaustion retry and by full
    /// history resets; capacities are untouched.
    pub fn clear_all(&mut self) {
        self.positive.clear();
        self.neutral.clear();
        self.negative.clear();
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}
