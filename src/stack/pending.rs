//! Pending effects awaiting a Nope response.
//!
//! A declared play sits at the bottom of a small LIFO stack while other
//! players may answer it. Each Nope is pushed on top of whatever it
//! cancels, so the stack reads bottom-up as "play, Nope, Nope, ...".

use serde::{Deserialize, Serialize};

use crate::core::{Play, PlayerId};

/// Unique identifier for a pending entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingId(pub u32);

impl PendingId {
    /// Create a new pending entry ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PendingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pending({})", self.0)
    }
}

/// What a pending entry is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingKind {
    /// The play being answered.
    Play(Play),
    /// A Nope cancelling the entry below it.
    Nope,
}

/// An entry on the pending stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEffect {
    pub id: PendingId,

    /// Who declared this entry. They cannot Nope it themselves.
    pub controller: PlayerId,

    pub kind: PendingKind,
}

/// Stack of pending entries (index 0 = bottom, last = top).
///
/// ```
/// use kitten_engine::cards::Card;
/// use kitten_engine::core::{Play, PlayerId};
/// use kitten_engine::stack::{PendingKind, PendingStack};
///
/// let mut stack = PendingStack::new();
/// stack.push(PlayerId::new(0), PendingKind::Play(Play::Card(Card::Attack)));
/// assert!(!stack.is_cancelled());
///
/// stack.push(PlayerId::new(1), PendingKind::Nope);
/// assert!(stack.is_cancelled());
///
/// // Nope the Nope: the Attack is back on
/// stack.push(PlayerId::new(0), PendingKind::Nope);
/// assert!(!stack.is_cancelled());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingStack {
    entries: Vec<PendingEffect>,
    next_id: u32,
}

impl PendingStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry and return its ID.
    pub fn push(&mut self, controller: PlayerId, kind: PendingKind) -> PendingId {
        let id = PendingId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(PendingEffect { id, controller, kind });
        id
    }

    /// The most recently declared entry.
    #[must_use]
    pub fn top(&self) -> Option<&PendingEffect> {
        self.entries.last()
    }

    /// The play at the bottom of the stack.
    #[must_use]
    pub fn base(&self) -> Option<&PendingEffect> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[PendingEffect] {
        &self.entries
    }

    /// Number of Nopes stacked on the play.
    #[must_use]
    pub fn nope_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == PendingKind::Nope)
            .count()
    }

    /// An odd number of Nopes cancels the play.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.nope_count() % 2 == 1
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_push_assigns_ids() {
        let mut stack = PendingStack::new();
        let a = stack.push(PlayerId::new(0), PendingKind::Play(Play::Card(Card::Skip)));
        let b = stack.push(PlayerId::new(1), PendingKind::Nope);

        assert_ne!(a, b);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(|e| e.id), Some(b));
        assert_eq!(stack.base().map(|e| e.id), Some(a));
    }

    #[test]
    fn test_nope_parity() {
        let mut stack = PendingStack::new();
        stack.push(PlayerId::new(0), PendingKind::Play(Play::Card(Card::Favor)));
        assert_eq!(stack.nope_count(), 0);

        for (i, expected) in [true, false, true].into_iter().enumerate() {
            stack.push(PlayerId::new((i % 2) as u8 + 1), PendingKind::Nope);
            assert_eq!(stack.is_cancelled(), expected);
        }
        assert_eq!(stack.nope_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut stack = PendingStack::new();
        stack.push(PlayerId::new(0), PendingKind::Nope);
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
    }
}
