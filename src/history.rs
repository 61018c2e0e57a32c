//! Bounded back/forward history of presented items.
//!
//! Only the selection operation appends; manual navigation just moves the
//! position. Picking something new while positioned before the tail
//! discards the forward (redo) branch irrevocably, like a browser history.

/// Position-addressed sequence of presented item identifiers.
///
/// `position` is `None` exactly when the log is empty, otherwise it indexes
/// a valid entry. The length bound is applied lazily: shrinking the limit
/// takes effect on the next [`append`](Self::append).
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<String>,
    position: Option<usize>,
    max_len: usize,
}

impl HistoryLog {
    /// Create an empty log bounded to `max_len` entries (clamped to ≥ 1).
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            position: None,
            max_len: max_len.max(1),
        }
    }

    /// The item at the current position, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.position.map(|pos| self.entries[pos].as_str())
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.position.is_some_and(|pos| pos > 0)
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.position
            .is_some_and(|pos| pos + 1 < self.entries.len())
    }

    /// Step back one entry and return the new current item, or `None` when
    /// already at the oldest entry (or empty).
    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.position = self.position.map(|pos| pos - 1);
        self.current()
    }

    /// Step forward one entry and return the new current item, or `None`
    /// when already at the tail (or empty).
    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.position = self.position.map(|pos| pos + 1);
        self.current()
    }

    /// The entry just ahead of the current position, without moving.
    /// The viewer uses this to preload the next item after a back-step.
    #[must_use]
    pub fn peek_forward(&self) -> Option<&str> {
        let pos = self.position?;
        self.entries.get(pos + 1).map(String::as_str)
    }

    /// Append a freshly picked item.
    ///
    /// Discards any redo branch beyond the current position, pushes `id`,
    /// moves the position to the tail, then evicts from the front while over
    /// the length bound, shifting the position accordingly (clamped to 0).
    pub fn append(&mut self, id: &str) {
        if let Some(pos) = self.position {
            if pos + 1 < self.entries.len() {
                log::debug!(
                    "Discarding {} forward history entries.",
                    self.entries.len() - pos - 1
                );
                self.entries.truncate(pos + 1);
            }
        }

        self.entries.push(id.to_string());
        let mut pos = self.entries.len() - 1;

        if self.entries.len() > self.max_len {
            let overflow = self.entries.len() - self.max_len;
            self.entries.drain(..overflow);
            pos = pos.saturating_sub(overflow);
        }
        self.position = Some(pos);
    }

    /// Change the length bound (clamped to ≥ 1). Takes effect on the next
    /// append; existing entries are kept until then.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.max(1);
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, `None` when empty.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Forget everything; the length bound is kept.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.position = None;
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(1000)
    }
}
