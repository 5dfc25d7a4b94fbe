//! Card system: card values, the draw pile, and composition tables.
//!
//! ## Key Types
//!
//! - `Card`: Tagged card value (type + breed for cats)
//! - `Breed`: Cat sub-type, used only for matching combos
//! - `Deck`: The shared draw pile (index 0 = top)
//! - `DeckComposition`: Table of cards shuffled into the deck at setup

pub mod card;
pub mod composition;
pub mod deck;

pub use card::{Breed, Card};
pub use composition::{CompositionEntry, DeckComposition};
pub use deck::Deck;
