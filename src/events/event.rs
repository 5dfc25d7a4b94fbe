//! Game notifications.
//!
//! The engine reports what happens as discrete `GameEvent`s. A
//! presentation layer decides how (and in what language) to show them;
//! the engine never formats output for players itself.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Play, PlayerId};

/// Something that happened during a match.
///
/// Events carry only public information. Cards revealed privately (See the
/// Future) go through the input provider instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A player's turn began. Owed turns from Attacks each start a turn.
    TurnStarted { player: PlayerId, turn: u32 },

    /// A play was declared and its cards left the hand.
    CardPlayed { player: PlayerId, play: Play },

    /// A player answered the pending effect with a Nope.
    Noped { player: PlayerId },

    /// An effect finished resolving (or was cancelled).
    EffectResolved { player: PlayerId, description: String },

    /// A player drew a card. Which card is not public.
    CardDrawn { player: PlayerId },

    /// A player survived an Exploding Kitten with a Defuse.
    KittenDefused { player: PlayerId },

    /// A player exploded and left the turn order.
    PlayerEliminated { player: PlayerId },

    /// An action was invalid and rolled back; the player acts again.
    ActionRejected { player: PlayerId, error: GameError },

    /// The match ended.
    GameOver { winner: Option<PlayerId> },
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::Noped { player }
            | GameEvent::EffectResolved { player, .. }
            | GameEvent::CardDrawn { player }
            | GameEvent::KittenDefused { player }
            | GameEvent::PlayerEliminated { player }
            | GameEvent::ActionRejected { player, .. } => Some(*player),
            GameEvent::GameOver { winner } => *winner,
        }
    }

    /// Short machine-friendly name of the event kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::TurnStarted { .. } => EventKind::TurnStarted,
            GameEvent::CardPlayed { .. } => EventKind::CardPlayed,
            GameEvent::Noped { .. } => EventKind::Noped,
            GameEvent::EffectResolved { .. } => EventKind::EffectResolved,
            GameEvent::CardDrawn { .. } => EventKind::CardDrawn,
            GameEvent::KittenDefused { .. } => EventKind::KittenDefused,
            GameEvent::PlayerEliminated { .. } => EventKind::PlayerEliminated,
            GameEvent::ActionRejected { .. } => EventKind::ActionRejected,
            GameEvent::GameOver { .. } => EventKind::GameOver,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnStarted { player, turn } => write!(f, "turn {turn}: {player}"),
            GameEvent::CardPlayed { player, play } => write!(f, "{player} plays {play}"),
            GameEvent::Noped { player } => write!(f, "{player} says Nope"),
            GameEvent::EffectResolved { player, description } => {
                write!(f, "{player}: {description}")
            }
            GameEvent::CardDrawn { player } => write!(f, "{player} draws a card"),
            GameEvent::KittenDefused { player } => write!(f, "{player} defuses an Exploding Kitten"),
            GameEvent::PlayerEliminated { player } => write!(f, "{player} exploded"),
            GameEvent::ActionRejected { player, error } => {
                write!(f, "{player}'s action was rejected: {error}")
            }
            GameEvent::GameOver { winner: Some(winner) } => write!(f, "game over, {winner} wins"),
            GameEvent::GameOver { winner: None } => f.write_str("game over, no winner"),
        }
    }
}

/// Discriminant of a `GameEvent`, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TurnStarted,
    CardPlayed,
    Noped,
    EffectResolved,
    CardDrawn,
    KittenDefused,
    PlayerEliminated,
    ActionRejected,
    GameOver,
}
