//! Game state.
//!
//! `GameState` owns everything a match mutates: the draw pile, discard
//! pile, players, turn order, and the random source. There is no global
//! state; every operation goes through a state value.
//!
//! ## Snapshots
//!
//! Deck, discard pile, and hands are `im` persistent collections, so
//! cloning the state is cheap. The effect resolver clones before it
//! touches anything and restores the clone if any step fails, which keeps
//! every effect all-or-nothing.

use im::Vector;

use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::turns::TurnOrder;

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Draw pile (index 0 = top).
    pub deck: Deck,

    /// Played, consumed, and discarded cards.
    pub discard: Vector<Card>,

    /// Every player ever seated, eliminated ones included.
    pub players: PlayerMap<Player>,

    /// Living players and the active seat.
    pub turns: TurnOrder,

    /// Random source for shuffles and random picks.
    pub rng: GameRng,

    /// Turn counter (starts at 1).
    pub turn_number: u32,
}

impl GameState {
    /// Create a state with players seated in id order.
    #[must_use]
    pub fn new(players: PlayerMap<Player>, deck: Deck, rng: GameRng) -> Self {
        let turns = TurnOrder::new(players.player_ids());
        Self {
            deck,
            discard: Vector::new(),
            players,
            turns,
            rng,
            turn_number: 1,
        }
    }

    /// Replace the seating order (first seat starts).
    #[must_use]
    pub fn with_seating(mut self, seats: impl IntoIterator<Item = PlayerId>) -> Self {
        self.turns = TurnOrder::new(seats);
        self
    }

    /// Number of players seated at the start.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// The active player.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turns.current()
    }

    /// Is `id` still in the turn order?
    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.turns.contains(id)
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Put several cards on the discard pile.
    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Cards in the deck, the discard pile, and every hand.
    ///
    /// Constant over a match: cards only ever move between these places.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(|(_, p)| p.hand_len()).sum::<usize>()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turns.is_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.turns.winner()
    }

    /// Capture the state for rollback.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Roll back to a snapshot.
    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}
