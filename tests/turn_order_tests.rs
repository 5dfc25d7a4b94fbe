//! Turn order, owed turns, and elimination.

use proptest::prelude::*;

use kitten_engine::core::{Player, PlayerId, PlayerMap};
use kitten_engine::turns::{Direction, TurnOrder};

fn setup(n: usize) -> (TurnOrder, PlayerMap<Player>) {
    let players = PlayerMap::new(n, |id| Player::new(id, format!("P{}", id.0)));
    (TurnOrder::new(PlayerId::all(n)), players)
}

/// Who acts for the next `turns` turns.
fn play(order: &mut TurnOrder, players: &mut PlayerMap<Player>, turns: usize) -> Vec<u8> {
    let mut seen = Vec::with_capacity(turns);
    for _ in 0..turns {
        seen.push(order.current().unwrap().0);
        order.advance(players);
    }
    seen
}

// =============================================================================
// Owed turns
// =============================================================================

#[test]
fn test_rotation_wraps() {
    let (mut order, mut players) = setup(3);
    assert_eq!(play(&mut order, &mut players, 7), vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn test_two_stacked_attacks_owe_four_turns() {
    let (mut order, mut players) = setup(3);
    players[PlayerId::new(1)].add_extra_turns(2);
    players[PlayerId::new(1)].add_extra_turns(2);

    assert_eq!(play(&mut order, &mut players, 7), vec![0, 1, 1, 1, 1, 2, 0]);
    assert_eq!(players[PlayerId::new(1)].extra_turns(), 0);
}

#[test]
fn test_owed_turns_in_reverse() {
    let (mut order, mut players) = setup(4);
    order.reverse();
    players[PlayerId::new(3)].add_extra_turns(2);

    assert_eq!(play(&mut order, &mut players, 5), vec![0, 3, 3, 2, 1]);
}

// =============================================================================
// Elimination
// =============================================================================

#[test]
fn test_eliminating_active_player_passes_turn() {
    let (mut order, mut players) = setup(4);
    order.advance(&mut players);
    assert_eq!(order.current(), Some(PlayerId::new(1)));

    assert!(order.eliminate(PlayerId::new(1)));
    assert_eq!(order.current(), Some(PlayerId::new(2)));
    assert_eq!(play(&mut order, &mut players, 4), vec![2, 3, 0, 2]);
}

#[test]
fn test_eliminating_last_seat_wraps() {
    let (mut order, mut players) = setup(3);
    play(&mut order, &mut players, 2);
    assert_eq!(order.current(), Some(PlayerId::new(2)));

    order.eliminate(PlayerId::new(2));
    assert_eq!(order.current(), Some(PlayerId::new(0)));
}

#[test]
fn test_eliminating_earlier_seat_keeps_active_player() {
    let (mut order, mut players) = setup(4);
    play(&mut order, &mut players, 2);

    order.eliminate(PlayerId::new(0));
    assert_eq!(order.current(), Some(PlayerId::new(2)));
    assert_eq!(order.next_after(PlayerId::new(3)), Some(PlayerId::new(1)));
}

#[test]
fn test_eliminating_twice_is_noop() {
    let (mut order, _) = setup(3);
    assert!(order.eliminate(PlayerId::new(1)));
    assert!(!order.eliminate(PlayerId::new(1)));
    assert_eq!(order.len(), 2);
}

#[test]
fn test_elimination_in_reverse() {
    let (mut order, mut players) = setup(4);
    order.reverse();
    order.advance(&mut players);
    assert_eq!(order.current(), Some(PlayerId::new(3)));

    order.eliminate(PlayerId::new(3));
    assert_eq!(order.current(), Some(PlayerId::new(2)));
    assert_eq!(order.direction(), Direction::Reverse);
}

// =============================================================================
// Win condition
// =============================================================================

#[test]
fn test_winner_is_last_seat() {
    let (mut order, _) = setup(3);
    assert_eq!(order.winner(), None);

    order.eliminate(PlayerId::new(0));
    assert!(!order.is_over());
    order.eliminate(PlayerId::new(2));

    assert!(order.is_over());
    assert_eq!(order.winner(), Some(PlayerId::new(1)));
    assert_eq!(order.current(), Some(PlayerId::new(1)));
    assert_eq!(order.next_after(PlayerId::new(1)), None);
    assert!(order.others(PlayerId::new(1)).is_empty());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// However players drop out, the active player is always seated and
    /// a full rotation visits each remaining seat exactly once.
    #[test]
    fn test_rotation_after_eliminations(
        n in 2usize..=5,
        script in prop::collection::vec((0usize..8, any::<bool>()), 0..4),
        reversed in any::<bool>(),
    ) {
        let (mut order, mut players) = setup(n);
        if reversed {
            order.reverse();
        }

        for (advance, drop_current) in script {
            if order.len() <= 2 {
                break;
            }
            play(&mut order, &mut players, advance);
            let victim = if drop_current {
                order.current().unwrap()
            } else {
                order.seats()[advance % order.len()]
            };
            prop_assert!(order.eliminate(victim));
            prop_assert!(!order.contains(victim));
            prop_assert!(order.current().is_some_and(|p| order.contains(p)));
        }

        let len = order.len();
        let mut lap = play(&mut order, &mut players, len);
        lap.sort_unstable();
        let mut seats: Vec<u8> = order.seats().iter().map(|p| p.0).collect();
        seats.sort_unstable();
        prop_assert_eq!(lap, seats);
    }

    /// `k` stacked attacks keep the target active for `2k` turns in a row.
    #[test]
    fn test_stacked_attacks(k in 1u32..5) {
        let (mut order, mut players) = setup(3);
        for _ in 0..k {
            players[PlayerId::new(1)].add_extra_turns(2);
        }
        order.advance(&mut players);

        let turns = play(&mut order, &mut players, (2 * k) as usize + 1);
        let (target, after) = turns.split_at((2 * k) as usize);
        prop_assert!(target.iter().all(|&p| p == 1));
        prop_assert_eq!(after, &[2u8][..]);
    }
}
