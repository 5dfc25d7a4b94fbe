//! Full matches for every supported table size.
//!
//! These tests verify that random play always terminates with a single
//! winner, cards are conserved, and eliminated players never act again.

use proptest::prelude::*;

use kitten_engine::cards::Card;
use kitten_engine::core::{GameConfig, GameError, PlayerId};
use kitten_engine::events::{GameEvent, TracingSink};
use kitten_engine::input::RandomInput;
use kitten_engine::rules::{GameBuilder, GameResult};

fn play_out(config: GameConfig, players: usize, seed: u64) -> (GameResult, Vec<GameEvent>, usize, usize) {
    let mut game = GameBuilder::new()
        .config(config)
        .player_count(players)
        .seed(seed)
        .build(RandomInput::from_seed(seed.wrapping_add(1)), Vec::new())
        .unwrap();
    let before = game.state().total_cards();

    let result = game.run();
    let (state, _, events) = game.into_parts();
    (result, events, before, state.total_cards())
}

fn check_match(events: &[GameEvent], players: usize) {
    let mut eliminated: Vec<PlayerId> = Vec::new();
    for event in events {
        match event {
            GameEvent::TurnStarted { player, .. } | GameEvent::CardPlayed { player, .. } => {
                assert!(!eliminated.contains(player), "{} acted after exploding", player);
            }
            GameEvent::PlayerEliminated { player } => {
                assert!(!eliminated.contains(player), "{} exploded twice", player);
                eliminated.push(*player);
            }
            _ => {}
        }
    }
    assert_eq!(eliminated.len(), players - 1);

    let game_overs = events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count();
    assert_eq!(game_overs, 1);
}

// =============================================================================
// Fixed seeds
// =============================================================================

#[test]
fn test_standard_games_have_a_winner() {
    for players in 2..=5 {
        for seed in 0..10 {
            let (result, events, before, after) = play_out(GameConfig::standard(), players, seed);

            let winner = result.winner().expect("match should end with a winner");
            assert!(winner.index() < players);
            assert_eq!(before, after, "cards lost with {players} players, seed {seed}");
            check_match(&events, players);
            assert_eq!(events.last(), Some(&GameEvent::GameOver { winner: Some(winner) }));
        }
    }
}

#[test]
fn test_expansion_games_have_a_winner() {
    for players in 2..=5 {
        for seed in 0..10 {
            let (result, events, before, after) = play_out(GameConfig::with_expansion(), players, seed);

            assert!(result.is_winner(), "{players} players, seed {seed}: {result:?}");
            assert_eq!(before, after);
            check_match(&events, players);
        }
    }
}

#[test]
fn test_same_seed_same_match() {
    let (first, first_events, _, _) = play_out(GameConfig::with_expansion(), 4, 77);
    let (second, second_events, _, _) = play_out(GameConfig::with_expansion(), 4, 77);

    assert_eq!(first, second);
    assert_eq!(first_events, second_events);
}

#[test]
fn test_kitten_count_tracks_players() {
    for players in 2..=5 {
        let state = GameBuilder::new().player_count(players).seed(3).build_state().unwrap();
        assert_eq!(state.deck.count(Card::ExplodingKitten), players - 1);
        assert_eq!(state.turns.len(), players);
    }
}

#[test]
fn test_table_size_limits() {
    for players in [0, 1, 6] {
        let err = GameBuilder::new().player_count(players).build_state().unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayerCount { .. }));
    }
}

#[test]
fn test_tracing_sink_match() {
    let mut game = GameBuilder::new()
        .config(GameConfig::standard().shuffled_seating())
        .players(["Ada", "Grace", "Linus"])
        .seed(12)
        .build(RandomInput::from_seed(12), TracingSink)
        .unwrap();

    assert!(game.run().is_winner());
    assert!(game.is_over());
}

#[test]
fn test_cautious_players_still_finish() {
    // Nobody plays cards or nopes; the match is decided by draws alone
    for players in 2..=5 {
        let input = RandomInput::from_seed(4).with_play_probability(0.0).with_nope_probability(0.0);
        let mut game = GameBuilder::new()
            .player_count(players)
            .seed(4)
            .build(input, Vec::new())
            .unwrap();

        assert!(game.run().is_winner());
        let plays = game.sink().iter().filter(|e| matches!(e, GameEvent::CardPlayed { .. })).count();
        assert_eq!(plays, 0);
    }
}

// =============================================================================
// Random seeds
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_random_matches_conserve_cards(players in 2usize..=5, seed in any::<u64>(), expansion in any::<bool>()) {
        let config = if expansion { GameConfig::with_expansion() } else { GameConfig::standard() };
        let (result, events, before, after) = play_out(config, players, seed);

        prop_assert!(result.is_winner());
        prop_assert_eq!(before, after);
        check_match(&events, players);
    }
}
