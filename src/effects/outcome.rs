//! Structured results of resolving a play.

use crate::cards::Card;
use crate::core::{Play, PlayerId};

/// Where the turn's draw comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawSource {
    #[default]
    Top,
    Bottom,
}

/// What the turn does after an effect resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnControl {
    /// The player keeps acting.
    Continue,
    /// The turn ends without a draw.
    EndTurn,
    /// The player draws now (kitten rules apply), then the turn ends.
    Draw(DrawSource),
}

/// What an effect did.
///
/// `Display` gives a public description: it never names cards that
/// changed hands privately or the cards seen with See the Future.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Turns ended without drawing (Skip, Double Skip, Super Skip).
    Skipped { turns: u32 },
    /// `target` now owes `owed` turns.
    Attacked { target: PlayerId, owed: u32 },
    Shuffled,
    /// Top cards seen by the actor, top first.
    Foresaw(Vec<Card>),
    /// `from` handed over `card`; `None` if their hand had emptied by the
    /// time the favor resolved.
    Favored { from: PlayerId, card: Option<Card> },
    /// `card` was taken from `from` with a cat triplet.
    Stolen { from: PlayerId, card: Option<Card> },
    /// A Cat Request for `requested`; `received` if `from` had one.
    Requested { from: PlayerId, requested: Card, received: bool },
    Reversed,
    HalvesSwitched,
    Rewound,
    /// A random `card` taken from `from`.
    Snatched { from: PlayerId, card: Option<Card> },
    /// The turn's draw comes from the bottom.
    BottomDraw,
    /// Cancelled by Nope.
    Noped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped { turns: 1 } => f.write_str("skipped a turn"),
            Outcome::Skipped { turns } => write!(f, "skipped {turns} turns"),
            Outcome::Attacked { target, owed } => {
                write!(f, "attacked {target}, who now owes {owed} turns")
            }
            Outcome::Shuffled => f.write_str("shuffled the deck"),
            Outcome::Foresaw(cards) => write!(f, "looked at the top {} cards", cards.len()),
            Outcome::Favored { from, card: Some(_) } => write!(f, "received a card from {from}"),
            Outcome::Favored { from, card: None } => write!(f, "got nothing from {from}"),
            Outcome::Stolen { from, card: Some(_) } => write!(f, "stole a card from {from}"),
            Outcome::Stolen { from, card: None } => write!(f, "found nothing to steal from {from}"),
            Outcome::Requested { from, requested, received: true } => {
                write!(f, "got {requested} from {from}")
            }
            Outcome::Requested { from, requested, received: false } => {
                write!(f, "asked {from} for {requested} and got nothing")
            }
            Outcome::Reversed => f.write_str("reversed the direction of play"),
            Outcome::HalvesSwitched => f.write_str("switched the deck halves"),
            Outcome::Rewound => f.write_str("moved the top cards to the bottom"),
            Outcome::Snatched { from, card: Some(_) } => write!(f, "snatched a card from {from}"),
            Outcome::Snatched { from, card: None } => write!(f, "found nothing to snatch from {from}"),
            Outcome::BottomDraw => f.write_str("draws from the bottom"),
            Outcome::Noped => f.write_str("was noped"),
        }
    }
}

/// Result of one call to the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub play: Play,
    pub outcome: Outcome,
    pub control: TurnControl,
    /// Players who played a Nope on this play, in order.
    pub nopers: Vec<PlayerId>,
}
