//! Player actions.
//!
//! On their turn a player either plays something (a single card or a cat
//! combo) or draws, which ends the turn. A `Play` names exactly which cards
//! leave the hand so the resolver can validate the whole multiset before
//! anything moves.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::{Breed, Card};

/// Something a player plays from their hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Play {
    /// A single action card.
    Card(Card),
    /// Three cat cards of one breed: steal a chosen card.
    Triplet(Breed),
    /// Two cat cards of one breed plus a Cat Request: ask for a card type.
    Request(Breed),
}

impl Play {
    /// Cards this play removes from the hand.
    ///
    /// SmallVec keeps the common 1-3 card case off the heap.
    #[must_use]
    pub fn cards(&self) -> SmallVec<[Card; 3]> {
        match *self {
            Play::Card(card) => smallvec![card],
            Play::Triplet(breed) => smallvec![Card::Cat(breed); 3],
            Play::Request(breed) => smallvec![Card::Cat(breed), Card::Cat(breed), Card::CatRequest],
        }
    }

    /// Is this a multi-card combo?
    #[must_use]
    pub fn is_combo(&self) -> bool {
        !matches!(self, Play::Card(_))
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Play::Card(card) => write!(f, "{card}"),
            Play::Triplet(breed) => write!(f, "three {breed}"),
            Play::Request(breed) => write!(f, "two {breed} with Cat Request"),
        }
    }
}

/// A turn action.
///
/// ```
/// use kitten_engine::cards::{Breed, Card};
/// use kitten_engine::core::{Action, Play};
///
/// let draw = Action::Draw;
/// let steal = Action::Play(Play::Triplet(Breed::Tacocat));
///
/// assert!(!draw.is_play());
/// assert_eq!(steal.as_play().map(|p| p.cards().len()), Some(3));
/// assert_eq!(Action::card(Card::Skip), Action::Play(Play::Card(Card::Skip)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card and end the turn.
    Draw,
    /// Play a card or combo; the turn continues unless the effect ends it.
    Play(Play),
}

impl Action {
    /// Play a single card.
    #[must_use]
    pub fn card(card: Card) -> Self {
        Action::Play(Play::Card(card))
    }

    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play(_))
    }

    /// The play, if any.
    #[must_use]
    pub fn as_play(&self) -> Option<Play> {
        match self {
            Action::Play(play) => Some(*play),
            Action::Draw => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => f.write_str("draw"),
            Action::Play(play) => write!(f, "play {play}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_cards() {
        assert_eq!(Play::Card(Card::Attack).cards().as_slice(), &[Card::Attack]);
        assert_eq!(
            Play::Triplet(Breed::BeardCat).cards().as_slice(),
            &[Card::Cat(Breed::BeardCat); 3]
        );
        assert_eq!(
            Play::Request(Breed::Rainbow).cards().as_slice(),
            &[Card::Cat(Breed::Rainbow), Card::Cat(Breed::Rainbow), Card::CatRequest]
        );
    }

    #[test]
    fn test_combo_flag() {
        assert!(!Play::Card(Card::Skip).is_combo());
        assert!(Play::Triplet(Breed::Tacocat).is_combo());
        assert!(Play::Request(Breed::Tacocat).is_combo());
    }

    #[test]
    fn test_action_accessors() {
        assert_eq!(Action::Draw.as_play(), None);
        assert_eq!(Action::card(Card::Nope).as_play(), Some(Play::Card(Card::Nope)));
        assert!(Action::card(Card::Nope).is_play());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Draw.to_string(), "draw");
        assert_eq!(Action::card(Card::Skip).to_string(), "play Skip");
        assert_eq!(
            Play::Triplet(Breed::Tacocat).to_string(),
            "three Tacocat"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Play(Play::Request(Breed::Watermelon));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
