//! The draw pile.
//!
//! Index 0 is the top of the deck. Backed by `im::Vector` so the whole
//! pile can be snapshotted in O(1) before an effect resolves.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::{GameError, GameRng};

/// Ordered draw pile (index 0 = top).
///
/// ```
/// use kitten_engine::cards::{Card, Deck};
///
/// let mut deck = Deck::from_cards(vec![Card::Skip, Card::Attack]);
/// deck.insert_at(Card::ExplodingKitten, 1).unwrap();
///
/// assert_eq!(deck.peek_top(3), vec![Card::Skip, Card::ExplodingKitten, Card::Attack]);
/// assert_eq!(deck.draw().unwrap(), Card::Skip);
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards listed top first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffle into a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    /// Remove and return the bottom card.
    pub fn draw_bottom(&mut self) -> Result<Card, GameError> {
        self.cards.pop_back().ok_or(GameError::EmptyDeck)
    }

    /// Insert a card so it becomes the card at `index` (0 = top).
    ///
    /// `index == len()` places it at the bottom.
    pub fn insert_at(&mut self, card: Card, index: usize) -> Result<(), GameError> {
        if index > self.cards.len() {
            return Err(GameError::InvalidDeckOperation {
                operation: "insert",
                index,
                size: self.cards.len(),
            });
        }
        self.cards.insert(index, card);
        Ok(())
    }

    /// Add a card to the bottom.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Look at up to `n` cards from the top without removing them.
    #[must_use]
    pub fn peek_top(&self, n: usize) -> Vec<Card> {
        self.cards.iter().take(n).copied().collect()
    }

    /// Swap the top and bottom halves.
    ///
    /// For an odd number of cards the middle card keeps its position.
    pub fn switch_halves(&mut self) {
        let size = self.cards.len();
        if size < 2 {
            return;
        }

        let mid = size / 2;
        let mut top = std::mem::take(&mut self.cards);
        let mut lower = top.split_off(mid);
        let mut out = if size % 2 == 0 {
            lower
        } else {
            let mut out = lower.split_off(1);
            out.append(lower);
            out
        };
        out.append(top);
        self.cards = out;
    }

    /// Move the top `n` cards to the bottom, keeping their order.
    pub fn rewind(&mut self, n: usize) -> Result<(), GameError> {
        if self.cards.len() < n {
            return Err(GameError::InvalidDeckOperation {
                operation: "rewind",
                index: n,
                size: self.cards.len(),
            });
        }
        let rest = self.cards.split_off(n);
        let top = std::mem::replace(&mut self.cards, rest);
        self.cards.append(top);
        Ok(())
    }

    /// Number of copies of `card` remaining.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Copies of each card remaining.
    #[must_use]
    pub fn tally(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for &card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}
