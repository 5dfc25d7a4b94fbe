//! Game configuration.
//!
//! A host configures a match at startup with a `GameConfig`:
//! - Supported player-count range
//! - Dealing rules (hand size, Defuses in the box)
//! - Effect tuning (see-the-future depth, turns imposed by Attack)
//! - The `DeckComposition` table of cards shuffled into the deck
//!
//! Configurations are plain serde values and can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::DeckComposition;

/// Complete game configuration.
///
/// ```
/// use kitten_engine::core::GameConfig;
///
/// let config = GameConfig::standard()
///     .with_player_range(2, 4)
///     .with_hand_size(5);
///
/// assert!(config.validate().is_ok());
/// assert!(config.check_player_count(5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fewest players a match may start with.
    pub min_players: usize,

    /// Most players a match may start with.
    pub max_players: usize,

    /// Cards dealt to each player from the shuffled table cards
    /// (the starting Defuse comes on top of this).
    pub hand_size: usize,

    /// Defuse cards in the box. Each player is dealt one; the rest are
    /// shuffled into the deck.
    pub defuses_total: usize,

    /// Cards revealed by See the Future.
    pub see_the_future_depth: usize,

    /// Turns an Attack adds to its target, on top of any the attacker
    /// still owes.
    pub attack_turns: u32,

    /// Shuffle the seating order at setup instead of seating players in
    /// the order they were given.
    pub shuffle_seating: bool,

    /// Table cards shuffled into the deck.
    pub composition: DeckComposition,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 5,
            hand_size: 7,
            defuses_total: 6,
            see_the_future_depth: 3,
            attack_turns: 2,
            shuffle_seating: false,
            composition: DeckComposition::standard(),
        }
    }
}

impl GameConfig {
    /// The base game.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// The base game with the expansion cards in the deck.
    #[must_use]
    pub fn with_expansion() -> Self {
        Self::default().with_composition(DeckComposition::with_expansion())
    }

    /// Set the supported player-count range (inclusive).
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_defuses_total(mut self, defuses: usize) -> Self {
        self.defuses_total = defuses;
        self
    }

    #[must_use]
    pub fn with_see_the_future_depth(mut self, depth: usize) -> Self {
        self.see_the_future_depth = depth;
        self
    }

    #[must_use]
    pub fn with_attack_turns(mut self, turns: u32) -> Self {
        self.attack_turns = turns;
        self
    }

    /// Shuffle seating at setup.
    #[must_use]
    pub fn shuffled_seating(mut self) -> Self {
        self.shuffle_seating = true;
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json).map_err(|e| GameError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Reject inconsistent configurations.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| {
            Err(GameError::InvalidConfig {
                reason: reason.to_string(),
            })
        };

        if self.min_players < 2 {
            return invalid("a match needs at least 2 players");
        }
        if self.min_players > self.max_players {
            return invalid("min_players exceeds max_players");
        }
        if self.max_players > 255 {
            return invalid("at most 255 players supported");
        }
        if self.defuses_total < self.max_players {
            return invalid("not enough Defuse cards to deal one to every player");
        }
        if self.attack_turns == 0 {
            return invalid("attack_turns must be at least 1");
        }
        self.composition.validate()
    }

    /// Check that a match with `count` players is supported.
    pub fn check_player_count(&self, count: usize) -> Result<(), GameError> {
        if count < self.min_players || count > self.max_players {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}
