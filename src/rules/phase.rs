//! Game-loop phases and results.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// Where the game loop is.
///
/// ```text
/// AwaitingAction -> ResolvingEffect -> AwaitingAction
///                -> (draw) -> AwaitingDefusePlacement -> AwaitingAction
///                          -> Eliminated -> AwaitingAction | GameOver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player chooses to play or draw.
    #[default]
    AwaitingAction,
    /// A play is being validated, answered, and applied.
    ResolvingEffect,
    /// A kitten was defused; the player is placing it back.
    AwaitingDefusePlacement,
    /// A player just exploded.
    Eliminated,
    /// Terminal.
    GameOver,
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Last player standing.
    Winner(PlayerId),
    /// Everyone is gone. Does not happen under the normal rules.
    NoWinner,
    /// A structural error ended the match.
    Aborted { reason: GameError },
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            _ => None,
        }
    }
}

/// What happened to the turn after one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The same player acts again.
    Continue,
    /// The turn ended; `next` is active (possibly the same player, if
    /// they owe turns).
    TurnEnded { next: PlayerId },
    /// `player` exploded; the next player's turn starts.
    Eliminated { player: PlayerId },
    /// The action was invalid and rolled back.
    Rejected(GameError),
    /// The match ended.
    Finished(GameResult),
}
