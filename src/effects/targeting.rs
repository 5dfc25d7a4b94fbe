//! Target selection for effects.
//!
//! Each targeted play has a `TargetRule`. Rules that name a fixed player
//! (the next one in turn order) resolve without asking anyone; the others
//! ask the actor to pick from the eligible candidates and re-check the
//! answer.

use crate::core::{GameError, GameState, Play, PlayerId};
use crate::cards::Card;
use crate::input::InputProvider;

/// Who a play may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRule {
    /// The next living player in the direction of play.
    NextPlayer,
    /// The next living player, who must hold a card.
    NextPlayerWithCards,
    /// Any other living player.
    Opponent,
    /// Any other living player holding a card.
    OpponentWithCards,
}

impl TargetRule {
    /// The rule for `play`, if it targets anyone.
    #[must_use]
    pub fn for_play(play: Play) -> Option<Self> {
        match play {
            Play::Card(Card::Attack) => Some(TargetRule::NextPlayer),
            Play::Card(Card::Snatch) => Some(TargetRule::NextPlayerWithCards),
            Play::Card(Card::Favor) | Play::Triplet(_) => Some(TargetRule::OpponentWithCards),
            Play::Request(_) => Some(TargetRule::Opponent),
            Play::Card(_) => None,
        }
    }

    /// Chosen by the actor rather than fixed by seating.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, TargetRule::Opponent | TargetRule::OpponentWithCards)
    }

    fn needs_cards(self) -> bool {
        matches!(self, TargetRule::NextPlayerWithCards | TargetRule::OpponentWithCards)
    }
}

/// Finds and validates targets.
pub struct TargetSelector;

impl TargetSelector {
    /// Eligible targets for `actor` under `rule`, in play order.
    #[must_use]
    pub fn candidates(state: &GameState, actor: PlayerId, rule: TargetRule) -> Vec<PlayerId> {
        let pool = match rule {
            TargetRule::NextPlayer | TargetRule::NextPlayerWithCards => {
                state.turns.next_after(actor).into_iter().collect()
            }
            TargetRule::Opponent | TargetRule::OpponentWithCards => state.turns.others(actor),
        };

        if !rule.needs_cards() {
            return pool;
        }
        pool.into_iter()
            .filter(|&p| state.player(p).is_some_and(|p| p.hand_len() > 0))
            .collect()
    }

    /// Pick the target for a play.
    ///
    /// Fails with `InvalidTarget` if nobody is eligible or the provider
    /// answers with an ineligible player.
    pub fn select<I: InputProvider + ?Sized>(
        state: &GameState,
        input: &mut I,
        actor: PlayerId,
        rule: TargetRule,
    ) -> Result<PlayerId, GameError> {
        let candidates = Self::candidates(state, actor, rule);

        if candidates.is_empty() {
            return Err(match state.turns.next_after(actor) {
                Some(next) if !rule.is_choice() => GameError::target(next, "holds no cards"),
                _ => GameError::target(actor, "no eligible target"),
            });
        }
        if !rule.is_choice() {
            return Ok(candidates[0]);
        }

        let chosen = input.choose_target(actor, &candidates);
        if candidates.contains(&chosen) {
            return Ok(chosen);
        }
        let reason = if chosen == actor {
            "cannot target yourself"
        } else if !state.is_alive(chosen) {
            "not in the turn order"
        } else {
            "holds no cards"
        };
        Err(GameError::target(chosen, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Breed, Deck};
    use crate::core::{GameRng, Player, PlayerMap};
    use crate::input::ScriptedInput;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    /// Four players; P2 has an empty hand.
    fn state() -> GameState {
        let mut players = PlayerMap::new(4, |id| Player::new(id, format!("P{}", id.0)));
        players[p(0)].receive(Card::Favor);
        players[p(1)].receive(Card::Skip);
        players[p(3)].receive(Card::Cat(Breed::Tacocat));
        GameState::new(players, Deck::new(), GameRng::new(0))
    }

    #[test]
    fn test_rules_for_plays() {
        assert_eq!(TargetRule::for_play(Play::Card(Card::Attack)), Some(TargetRule::NextPlayer));
        assert_eq!(
            TargetRule::for_play(Play::Triplet(Breed::Rainbow)),
            Some(TargetRule::OpponentWithCards)
        );
        assert_eq!(TargetRule::for_play(Play::Request(Breed::Rainbow)), Some(TargetRule::Opponent));
        assert_eq!(TargetRule::for_play(Play::Card(Card::Shuffle)), None);
    }

    #[test]
    fn test_candidates_filter_empty_hands() {
        let state = state();
        assert_eq!(
            TargetSelector::candidates(&state, p(0), TargetRule::OpponentWithCards),
            vec![p(1), p(3)]
        );
        assert_eq!(
            TargetSelector::candidates(&state, p(0), TargetRule::Opponent),
            vec![p(1), p(2), p(3)]
        );
        assert_eq!(TargetSelector::candidates(&state, p(1), TargetRule::NextPlayer), vec![p(2)]);
        assert!(TargetSelector::candidates(&state, p(1), TargetRule::NextPlayerWithCards).is_empty());
    }

    #[test]
    fn test_select_fixed_rule_skips_input() {
        let state = state();
        let mut input = ScriptedInput::new().with_targets([p(3)]);
        let target = TargetSelector::select(&state, &mut input, p(0), TargetRule::NextPlayer).unwrap();
        assert_eq!(target, p(1));
    }

    #[test]
    fn test_select_rejects_ineligible_answers() {
        let state = state();

        let mut input = ScriptedInput::new().with_targets([p(2)]);
        let err = TargetSelector::select(&state, &mut input, p(0), TargetRule::OpponentWithCards)
            .unwrap_err();
        assert_eq!(err, GameError::target(p(2), "holds no cards"));

        let mut input = ScriptedInput::new().with_targets([p(0)]);
        let err = TargetSelector::select(&state, &mut input, p(0), TargetRule::Opponent).unwrap_err();
        assert!(matches!(err, GameError::InvalidTarget { target, .. } if target == p(0)));

        let mut input = ScriptedInput::new().with_targets([p(9)]);
        assert!(TargetSelector::select(&state, &mut input, p(0), TargetRule::Opponent).is_err());
    }

    #[test]
    fn test_select_next_with_empty_hand() {
        let state = state();
        let mut input = ScriptedInput::new();
        let err = TargetSelector::select(&state, &mut input, p(1), TargetRule::NextPlayerWithCards)
            .unwrap_err();
        assert_eq!(err, GameError::target(p(2), "holds no cards"));
    }
}
