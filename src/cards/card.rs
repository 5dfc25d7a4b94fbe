//! Card values.
//!
//! A `Card` is a plain tagged value: there are no instances, ids, or
//! per-card state. Two cards of the same type (and breed) are
//! interchangeable, so equality is structural.

use serde::{Deserialize, Serialize};

/// Cat breeds. Breeds only matter for matching pairs and triplets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breed {
    Tacocat,
    Watermelon,
    BeardCat,
    HairyPotato,
    Rainbow,
}

impl Breed {
    /// All breeds, in a fixed order.
    pub const ALL: [Breed; 5] = [
        Breed::Tacocat,
        Breed::Watermelon,
        Breed::BeardCat,
        Breed::HairyPotato,
        Breed::Rainbow,
    ];

    /// Display name of the breed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Breed::Tacocat => "Tacocat",
            Breed::Watermelon => "Watermelon Cat",
            Breed::BeardCat => "Beard Cat",
            Breed::HairyPotato => "Hairy Potato Cat",
            Breed::Rainbow => "Rainbow-Ralphing Cat",
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A card.
///
/// The base game cards come first; the remaining variants are expansion
/// cards that only appear when the deck composition includes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    ExplodingKitten,
    Defuse,
    Attack,
    Skip,
    Shuffle,
    SeeTheFuture,
    Nope,
    Favor,
    CatRequest,
    Cat(Breed),

    // === Expansion ===
    DrawFromBottom,
    Reverse,
    SwitchDeckByHalf,
    TimeRewind,
    DoubleSkip,
    SuperSkip,
    Snatch,
}

impl Card {
    /// Cat card of the given breed.
    #[must_use]
    pub const fn cat(breed: Breed) -> Self {
        Card::Cat(breed)
    }

    /// Breed of a cat card.
    #[must_use]
    pub const fn breed(self) -> Option<Breed> {
        match self {
            Card::Cat(breed) => Some(breed),
            _ => None,
        }
    }

    /// Is this a cat card?
    #[must_use]
    pub const fn is_cat(self) -> bool {
        matches!(self, Card::Cat(_))
    }

    /// Can this card be played on its own as a turn action?
    ///
    /// Cats and CatRequest only work in combos, Nope only as a response,
    /// and Defuse / Exploding Kitten are never played.
    #[must_use]
    pub const fn is_action(self) -> bool {
        !matches!(
            self,
            Card::ExplodingKitten | Card::Defuse | Card::Nope | Card::CatRequest | Card::Cat(_)
        )
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::ExplodingKitten => "Exploding Kitten",
            Card::Defuse => "Defuse",
            Card::Attack => "Attack",
            Card::Skip => "Skip",
            Card::Shuffle => "Shuffle",
            Card::SeeTheFuture => "See the Future",
            Card::Nope => "Nope",
            Card::Favor => "Favor",
            Card::CatRequest => "Cat Request",
            Card::Cat(breed) => breed.name(),
            Card::DrawFromBottom => "Draw from the Bottom",
            Card::Reverse => "Reverse",
            Card::SwitchDeckByHalf => "Switch Deck by Half",
            Card::TimeRewind => "Time Rewind",
            Card::DoubleSkip => "Double Skip",
            Card::SuperSkip => "Super Skip",
            Card::Snatch => "Snatch",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
