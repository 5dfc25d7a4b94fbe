//! Player identification, per-player storage, and player state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier (0-based).
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.
//!
//! ## Player
//!
//! Name, hand, alive flag, and the count of turns owed from Attacks.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;
use crate::cards::{Breed, Card};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use kitten_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use kitten_engine::core::{PlayerId, PlayerMap};
///
/// let mut hands: PlayerMap<usize> = PlayerMap::new(3, |_| 7);
/// hands[PlayerId::new(1)] -= 1;
/// assert_eq!(hands[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player.
///
/// The hand keeps insertion order so index-based choices (Favor,
/// cat steals) are stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vector<Card>,
    alive: bool,
    /// Turns owed from Attacks, counting the turn in progress.
    /// 0 and 1 both mean a normal single turn.
    extra_turns: u32,
}

impl Player {
    /// Create a living player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            alive: true,
            extra_turns: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn extra_turns(&self) -> u32 {
        self.extra_turns
    }

    // === Hand ===

    /// Add a card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Remove one copy of `card`.
    pub fn remove(&mut self, card: Card) -> Result<Card, GameError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand {
                player: self.id,
                card,
            })?;
        Ok(self.hand.remove(pos))
    }

    /// Remove every card in `cards`, or none of them.
    pub fn remove_all(&mut self, cards: &[Card]) -> Result<(), GameError> {
        for &card in cards {
            let needed = cards.iter().filter(|&&c| c == card).count();
            if self.count(card) < needed {
                return Err(GameError::CardNotInHand {
                    player: self.id,
                    card,
                });
            }
        }
        for &card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Remove the card at `index`.
    pub fn take_at(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidCardIndex {
                index,
                bound: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Empty the hand, returning its cards.
    pub fn take_hand(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.hand)
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Copies of `card` in hand.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.hand.iter().filter(|&&c| c == card).count()
    }

    /// Cat cards of `breed` in hand.
    #[must_use]
    pub fn count_of(&self, breed: Breed) -> usize {
        self.count(Card::Cat(breed))
    }

    /// Can this player form a three-of-a-kind with `breed`?
    #[must_use]
    pub fn has_triplet(&self, breed: Breed) -> bool {
        self.count_of(breed) >= 3
    }

    // === Status ===

    /// Mark the player as eliminated. Idempotent.
    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    /// Owe `n` more turns.
    pub fn add_extra_turns(&mut self, n: u32) {
        self.extra_turns += n;
    }

    pub fn set_extra_turns(&mut self, n: u32) {
        self.extra_turns = n;
    }
}
