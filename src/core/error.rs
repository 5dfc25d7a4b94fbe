//! Engine error type.
//!
//! Every failure the engine can report is a `GameError` variant. Most are
//! validation errors: the offending effect is rolled back and the acting
//! player may try again. Two are structural (see [`GameError::is_fatal`])
//! and end the match.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Errors raised by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A draw was attempted with no cards remaining.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// A deck position outside the valid range, or an operation the deck
    /// is too small for.
    #[error("invalid deck operation `{operation}`: index {index} with {size} cards")]
    InvalidDeckOperation {
        operation: &'static str,
        index: usize,
        size: usize,
    },

    /// The player does not hold the card they tried to give up.
    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },

    /// A played combination does not satisfy the required cards.
    #[error("invalid combo: {reason}")]
    InvalidCombo { reason: String },

    /// The selected target cannot be targeted by this effect.
    #[error("invalid target {target}: {reason}")]
    InvalidTarget { target: PlayerId, reason: String },

    /// A hand index outside `0..bound`.
    #[error("card index {index} out of range (hand holds {bound})")]
    InvalidCardIndex { index: usize, bound: usize },

    /// Setup requested with an unsupported number of players.
    #[error("unsupported player count {count}, expected {min}..={max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    /// Defuse and Exploding Kitten cannot be played as actions.
    #[error("{card} cannot be played")]
    UnplayableCard { card: Card },

    /// A Nope needs a pending effect from another player.
    #[error("there is nothing to nope")]
    NothingToNope,

    /// The turn order has no players left.
    #[error("no players remain in the turn order")]
    NoPlayersRemaining,

    /// An action was submitted after the match ended.
    #[error("the game is already over")]
    GameOver,

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GameError {
    /// Structural errors terminate the match instead of being retried.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::EmptyDeck | GameError::NoPlayersRemaining)
    }

    pub(crate) fn combo(reason: impl Into<String>) -> Self {
        GameError::InvalidCombo { reason: reason.into() }
    }

    pub(crate) fn target(target: PlayerId, reason: impl Into<String>) -> Self {
        GameError::InvalidTarget {
            target,
            reason: reason.into(),
        }
    }
}
