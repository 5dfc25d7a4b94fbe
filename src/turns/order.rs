//! Turn-order registry.
//!
//! Holds the seats of living players plus a cursor at the active one.
//! Eliminated players are removed from the seating, never merely flagged,
//! so the cursor always points at a living player while any remain.
//!
//! ## Owed turns
//!
//! Attacks are modeled as a per-player counter (`Player::extra_turns`)
//! instead of duplicate seats. The counter holds the number of turns the
//! player owes, including the one in progress; `advance()` keeps the
//! cursor in place while more than one is owed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, PlayerId, PlayerMap};

/// Direction of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Circular seating of living players with a current-player cursor.
///
/// ```
/// use kitten_engine::core::{Player, PlayerId, PlayerMap};
/// use kitten_engine::turns::TurnOrder;
///
/// let mut players = PlayerMap::new(3, |id| Player::new(id, format!("P{}", id.0)));
/// let mut order = TurnOrder::new(PlayerId::all(3));
///
/// assert_eq!(order.current(), Some(PlayerId::new(0)));
/// assert_eq!(order.advance(&mut players), Some(PlayerId::new(1)));
///
/// order.eliminate(PlayerId::new(1));
/// assert_eq!(order.current(), Some(PlayerId::new(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    cursor: usize,
    direction: Direction,
}

impl TurnOrder {
    /// Seat players in the given order; the first seat starts.
    pub fn new(seats: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            seats: seats.into_iter().collect(),
            cursor: 0,
            direction: Direction::Forward,
        }
    }

    /// The active player, `None` once everyone is gone.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.seats.get(self.cursor).copied()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Living players in seating order.
    #[must_use]
    pub fn seats(&self) -> &[PlayerId] {
        &self.seats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    fn position(&self, player: PlayerId) -> Option<usize> {
        self.seats.iter().position(|&p| p == player)
    }

    fn step(&self, index: usize) -> usize {
        let len = self.seats.len();
        match self.direction {
            Direction::Forward => (index + 1) % len,
            Direction::Reverse => (index + len - 1) % len,
        }
    }

    /// The player who would act after `player` in the current direction.
    ///
    /// `None` if `player` is not seated or is the only one left.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> Option<PlayerId> {
        if self.seats.len() < 2 {
            return None;
        }
        let index = self.position(player)?;
        Some(self.seats[self.step(index)])
    }

    /// Every other living player, in play order starting after `player`.
    #[must_use]
    pub fn others(&self, player: PlayerId) -> Vec<PlayerId> {
        let Some(start) = self.position(player) else {
            return self.seats.clone();
        };
        let mut out = Vec::with_capacity(self.seats.len().saturating_sub(1));
        let mut index = start;
        for _ in 1..self.seats.len() {
            index = self.step(index);
            out.push(self.seats[index]);
        }
        out
    }

    /// End the current turn.
    ///
    /// If the current player owes more than one turn, one is paid off and
    /// they stay active. Otherwise their counter is cleared and the cursor
    /// moves to the next living player. Returns the new active player.
    pub fn advance(&mut self, players: &mut PlayerMap<Player>) -> Option<PlayerId> {
        let current = self.current()?;
        let player = &mut players[current];

        if player.extra_turns() > 1 {
            player.set_extra_turns(player.extra_turns() - 1);
            debug!("{} owes {} more turn(s)", current, player.extra_turns());
            return Some(current);
        }

        player.set_extra_turns(0);
        self.cursor = self.step(self.cursor);
        let next = self.current();
        debug!("turn passes from {} to {:?}", current, next);
        next
    }

    /// Remove a player from the seating.
    ///
    /// Removing the active player hands the turn to whoever would have
    /// played next; no other seat is skipped. Returns `false` if the
    /// player was not seated.
    pub fn eliminate(&mut self, player: PlayerId) -> bool {
        let Some(index) = self.position(player) else {
            return false;
        };
        self.seats.remove(index);

        let len = self.seats.len();
        if len == 0 {
            self.cursor = 0;
            return true;
        }

        if index < self.cursor {
            self.cursor -= 1;
        } else if index == self.cursor {
            self.cursor = match self.direction {
                Direction::Forward => index % len,
                Direction::Reverse => (index + len - 1) % len,
            };
        }
        true
    }

    /// Reverse the direction of play.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// One or zero players left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.seats.len() <= 1
    }

    /// The last player standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.seats.as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> (TurnOrder, PlayerMap<Player>) {
        let players = PlayerMap::new(n, |id| Player::new(id, format!("P{}", id.0)));
        (TurnOrder::new(PlayerId::all(n)), players)
    }

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_advance_wraps() {
        let (mut order, mut players) = setup(3);
        assert_eq!(order.advance(&mut players), Some(p(1)));
        assert_eq!(order.advance(&mut players), Some(p(2)));
        assert_eq!(order.advance(&mut players), Some(p(0)));
    }

    #[test]
    fn test_owed_turns_keep_cursor() {
        let (mut order, mut players) = setup(2);
        players[p(0)].add_extra_turns(2);

        assert_eq!(order.advance(&mut players), Some(p(0)));
        assert_eq!(players[p(0)].extra_turns(), 1);
        assert_eq!(order.advance(&mut players), Some(p(1)));
        assert_eq!(players[p(0)].extra_turns(), 0);
    }

    #[test]
    fn test_stacked_attacks_four_turns() {
        let (mut order, mut players) = setup(3);
        players[p(0)].add_extra_turns(2);
        players[p(0)].add_extra_turns(2);
        assert_eq!(players[p(0)].extra_turns(), 4);

        let mut turns_taken = 1;
        while order.advance(&mut players) == Some(p(0)) {
            turns_taken += 1;
        }
        assert_eq!(turns_taken, 4);
        assert_eq!(order.current(), Some(p(1)));
    }

    #[test]
    fn test_reverse_direction() {
        let (mut order, mut players) = setup(4);
        order.reverse();
        assert_eq!(order.direction(), Direction::Reverse);
        assert_eq!(order.advance(&mut players), Some(p(3)));
        assert_eq!(order.advance(&mut players), Some(p(2)));
        assert_eq!(order.next_after(p(2)), Some(p(1)));
    }

    #[test]
    fn test_eliminate_current_passes_to_next() {
        let (mut order, mut players) = setup(4);
        order.advance(&mut players);
        assert_eq!(order.current(), Some(p(1)));

        assert!(order.eliminate(p(1)));
        assert_eq!(order.current(), Some(p(2)));
        assert!(!order.contains(p(1)));
        assert!(!order.eliminate(p(1)));
    }

    #[test]
    fn test_eliminate_last_seat_wraps() {
        let (mut order, mut players) = setup(3);
        order.advance(&mut players);
        order.advance(&mut players);
        assert_eq!(order.current(), Some(p(2)));

        order.eliminate(p(2));
        assert_eq!(order.current(), Some(p(0)));
    }

    #[test]
    fn test_eliminate_before_cursor() {
        let (mut order, mut players) = setup(4);
        order.advance(&mut players);
        order.advance(&mut players);

        order.eliminate(p(0));
        assert_eq!(order.current(), Some(p(2)));
        assert_eq!(order.advance(&mut players), Some(p(3)));
        assert_eq!(order.advance(&mut players), Some(p(1)));
    }

    #[test]
    fn test_eliminate_current_in_reverse() {
        let (mut order, mut players) = setup(4);
        order.reverse();
        order.advance(&mut players);
        assert_eq!(order.current(), Some(p(3)));

        order.eliminate(p(3));
        assert_eq!(order.current(), Some(p(2)));
    }

    #[test]
    fn test_next_after_and_others() {
        let (order, _) = setup(4);
        assert_eq!(order.next_after(p(3)), Some(p(0)));
        assert_eq!(order.others(p(2)), vec![p(3), p(0), p(1)]);

        let solo = TurnOrder::new([p(1)]);
        assert_eq!(solo.next_after(p(1)), None);
        assert!(solo.others(p(1)).is_empty());
    }

    #[test]
    fn test_win_condition() {
        let (mut order, _) = setup(3);
        assert!(!order.is_over());
        assert_eq!(order.winner(), None);

        order.eliminate(p(0));
        order.eliminate(p(2));
        assert!(order.is_over());
        assert_eq!(order.winner(), Some(p(1)));

        order.eliminate(p(1));
        assert!(order.is_over());
        assert_eq!(order.winner(), None);
        assert_eq!(order.current(), None);
    }
}
