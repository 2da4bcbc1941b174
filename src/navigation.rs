//! Bounded cursor over the active (full or search-filtered) sequence.
//!
//! The cursor holds only a position. The length of the active sequence is
//! passed in on every call, because a new query can change it between calls.

/// Next position, clamped to the last index. Returns 0 for an empty sequence;
/// callers check `length == 0` before indexing.
pub fn advance(position: usize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    (position + 1).min(length - 1)
}

/// Previous position, never below 0
pub fn retreat(position: usize) -> usize {
    position.saturating_sub(1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn position(self) -> usize {
        self.position
    }

    #[must_use]
    pub fn advance(self, length: usize) -> Self {
        Self { position: advance(self.position, length) }
    }

    #[must_use]
    pub fn retreat(self) -> Self {
        Self { position: retreat(self.position) }
    }

    /// Position pulled back inside `[0, length - 1]` (0 when empty)
    #[must_use]
    pub fn clamp(self, length: usize) -> Self {
        Self { position: self.position.min(length.saturating_sub(1)) }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }
}
