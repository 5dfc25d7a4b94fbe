//! Deck composition tables.
//!
//! The composition lists the "table" cards shuffled into the draw pile
//! at setup. Exploding Kittens and Defuses are placed by the setup rules
//! (one Defuse per player, `players - 1` kittens) and never appear here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Breed, Card};
use crate::core::GameError;

/// One row of a composition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionEntry {
    pub card: Card,
    pub count: usize,
}

/// Multiset of table cards used to build the deck.
///
/// ```
/// use kitten_engine::cards::{Card, DeckComposition};
///
/// let base = DeckComposition::standard();
/// assert_eq!(base.count(Card::Nope), 5);
/// assert_eq!(base.count(Card::Reverse), 0);
///
/// let expanded = DeckComposition::with_expansion();
/// assert_eq!(expanded.count(Card::Reverse), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    entries: Vec<CompositionEntry>,
}

impl DeckComposition {
    /// Create an empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The base game.
    #[must_use]
    pub fn standard() -> Self {
        let mut composition = Self::new()
            .with(Card::Attack, 4)
            .with(Card::Skip, 4)
            .with(Card::Favor, 4)
            .with(Card::Shuffle, 4)
            .with(Card::SeeTheFuture, 5)
            .with(Card::Nope, 5)
            .with(Card::CatRequest, 2);
        for breed in Breed::ALL {
            composition = composition.with(Card::Cat(breed), 4);
        }
        composition
    }

    /// The base game plus the expansion cards.
    #[must_use]
    pub fn with_expansion() -> Self {
        Self::standard()
            .with(Card::DrawFromBottom, 2)
            .with(Card::Reverse, 2)
            .with(Card::SwitchDeckByHalf, 1)
            .with(Card::TimeRewind, 1)
            .with(Card::DoubleSkip, 2)
            .with(Card::SuperSkip, 2)
            .with(Card::Snatch, 1)
    }

    /// Add copies of a card (builder pattern).
    ///
    /// Adding a card already present increases its count.
    #[must_use]
    pub fn with(mut self, card: Card, count: usize) -> Self {
        match self.entries.iter_mut().find(|e| e.card == card) {
            Some(entry) => entry.count += count,
            None => self.entries.push(CompositionEntry { card, count }),
        }
        self
    }

    /// Table rows.
    #[must_use]
    pub fn entries(&self) -> &[CompositionEntry] {
        &self.entries
    }

    /// Copies of `card` in the table.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.entries
            .iter()
            .filter(|e| e.card == card)
            .map(|e| e.count)
            .sum()
    }

    /// Total number of table cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Expand the table into a list of cards (table order, unshuffled).
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.card).take(e.count))
            .collect()
    }

    /// Counts per card, merged across duplicate rows.
    #[must_use]
    pub fn tally(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for entry in &self.entries {
            *counts.entry(entry.card).or_insert(0) += entry.count;
        }
        counts
    }

    /// Reject tables containing cards the setup rules place themselves.
    pub fn validate(&self) -> Result<(), GameError> {
        for card in [Card::ExplodingKitten, Card::Defuse] {
            if self.count(card) > 0 {
                return Err(GameError::InvalidConfig {
                    reason: format!("composition must not list {card}"),
                });
            }
        }
        Ok(())
    }
}
