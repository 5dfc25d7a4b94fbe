//! Match setup.
//!
//! `GameBuilder` deals a fresh match from a `GameConfig`, player names,
//! and a seed:
//!
//! 1. Check the player count against the configured range.
//! 2. Shuffle the composition's table cards.
//! 3. Deal `hand_size` cards round-robin, then one Defuse each.
//! 4. Add the spare Defuses and `players - 1` Exploding Kittens to the
//!    deck and shuffle again.
//! 5. Seat players in the given order, or shuffled if configured.

use tracing::info;

use super::engine::Game;
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, GameRng, GameState, Player, PlayerId, PlayerMap};
use crate::events::EventSink;
use crate::input::InputProvider;

/// Builder for a new match.
///
/// ```
/// use kitten_engine::cards::Card;
/// use kitten_engine::rules::GameBuilder;
///
/// let state = GameBuilder::new()
///     .players(["Ada", "Grace", "Linus"])
///     .seed(42)
///     .build_state()
///     .unwrap();
///
/// assert_eq!(state.player_count(), 3);
/// assert_eq!(state.deck.count(Card::ExplodingKitten), 2);
/// for (_, player) in state.players.iter() {
///     assert_eq!(player.hand_len(), 8);
///     assert!(player.holds(Card::Defuse));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    names: Vec<String>,
    seed: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            names: Vec::new(),
            seed: 0,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Player names, in seating order.
    pub fn players<N: Into<String>>(mut self, names: impl IntoIterator<Item = N>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// `count` players named "Player 1", "Player 2", ...
    pub fn player_count(mut self, count: usize) -> Self {
        self.names = (1..=count).map(|i| format!("Player {i}")).collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal the initial state.
    pub fn build_state(&self) -> Result<GameState, GameError> {
        let config = &self.config;
        let count = self.names.len();
        config.check_player_count(count)?;
        config.validate()?;

        let table = config.composition.build();
        if table.len() < count * config.hand_size {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "{} table cards cannot deal {} to each of {} players",
                    table.len(),
                    config.hand_size,
                    count
                ),
            });
        }

        let mut rng = GameRng::new(self.seed);
        let mut deck = Deck::from_cards(table);
        deck.shuffle(&mut rng);

        let mut players = PlayerMap::new(count, |id| Player::new(id, self.names[id.index()].clone()));
        for _ in 0..config.hand_size {
            for id in PlayerId::all(count) {
                let card = deck.draw()?;
                players[id].receive(card);
            }
        }
        for id in PlayerId::all(count) {
            players[id].receive(Card::Defuse);
        }

        for _ in 0..config.defuses_total.saturating_sub(count) {
            deck.push_bottom(Card::Defuse);
        }
        for _ in 1..count {
            deck.push_bottom(Card::ExplodingKitten);
        }
        deck.shuffle(&mut rng);

        let mut seats: Vec<PlayerId> = PlayerId::all(count).collect();
        if config.shuffle_seating {
            rng.for_context("seating").shuffle(&mut seats);
        }

        info!("dealt {} players, {} cards in the deck", count, deck.len());
        Ok(GameState::new(players, deck, rng).with_seating(seats))
    }

    /// Deal and wrap the state in a `Game`.
    pub fn build<I: InputProvider, S: EventSink>(self, input: I, sink: S) -> Result<Game<I, S>, GameError> {
        let state = self.build_state()?;
        Ok(Game::from_state(self.config, state, input, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckComposition;

    #[test]
    fn test_rejects_player_counts() {
        let err = GameBuilder::new().player_count(1).build_state().unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount { count: 1, min: 2, max: 5 });

        let err = GameBuilder::new().player_count(6).build_state().unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayerCount { count: 6, .. }));
    }

    #[test]
    fn test_deal_counts() {
        for count in 2..=5 {
            let state = GameBuilder::new().player_count(count).seed(3).build_state().unwrap();
            let table = DeckComposition::standard().total();

            assert_eq!(state.deck.count(Card::ExplodingKitten), count - 1);
            assert_eq!(state.deck.count(Card::Defuse), 6 - count);
            assert_eq!(state.deck.len(), table - 7 * count + (6 - count) + (count - 1));
            assert_eq!(state.total_cards(), table + 6 + count - 1);
            for (_, player) in state.players.iter() {
                assert_eq!(player.hand_len(), 8);
                assert_eq!(player.count(Card::Defuse), 1);
                assert_eq!(player.count(Card::ExplodingKitten), 0);
            }
        }
    }

    #[test]
    fn test_five_card_deal() {
        let config = GameConfig::default().with_hand_size(5);
        let state = GameBuilder::new().config(config).player_count(4).seed(3).build_state().unwrap();

        for (_, player) in state.players.iter() {
            assert_eq!(player.hand_len(), 6);
            assert!(player.holds(Card::Defuse));
        }
    }

    #[test]
    fn test_deterministic_deal() {
        let a = GameBuilder::new().player_count(3).seed(99).build_state().unwrap();
        let b = GameBuilder::new().player_count(3).seed(99).build_state().unwrap();
        let c = GameBuilder::new().player_count(3).seed(100).build_state().unwrap();

        assert_eq!(a.deck, b.deck);
        assert_eq!(a.players, b.players);
        assert_ne!(a.deck, c.deck);
    }

    #[test]
    fn test_seating() {
        let state = GameBuilder::new().players(["A", "B", "C", "D"]).build_state().unwrap();
        assert_eq!(state.turns.seats(), &PlayerId::all(4).collect::<Vec<_>>()[..]);
        assert_eq!(state.players[PlayerId::new(2)].name(), "C");

        let config = GameConfig::default().shuffled_seating();
        let state = GameBuilder::new().config(config).player_count(5).seed(8).build_state().unwrap();
        let mut seats = state.turns.seats().to_vec();
        seats.sort();
        assert_eq!(seats, PlayerId::all(5).collect::<Vec<_>>());
    }

    #[test]
    fn test_small_composition_rejected() {
        let config = GameConfig::default().with_composition(DeckComposition::new().with(Card::Skip, 5));
        let err = GameBuilder::new().config(config).player_count(2).build_state().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }
}
