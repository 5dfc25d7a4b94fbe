//! The input-provider seam.
//!
//! The engine never prompts anyone. Whenever a rule needs a decision it
//! calls the `InputProvider` synchronously and resumes with the answer.
//! Answers are re-validated: an out-of-range index or ineligible target
//! becomes a `GameError` and the effect is rolled back.

use crate::cards::Card;
use crate::core::{Action, Player, PlayerId};
use crate::stack::PendingStack;

/// Source of player decisions (CLI, UI, scripted test, random bot).
pub trait InputProvider {
    /// What the active player does next.
    fn choose_action(&mut self, player: &Player) -> Action;

    /// Pick a target from `candidates` (never empty).
    fn choose_target(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId;

    /// Pick a hand index in `0..bound`.
    fn choose_card_index(&mut self, chooser: PlayerId, bound: usize) -> usize;

    /// Pick where a defused kitten goes back, in `0..=deck_size` (0 = top).
    fn choose_reinsertion_index(&mut self, chooser: PlayerId, deck_size: usize) -> usize;

    /// Name the card asked for with a Cat Request.
    fn choose_card_type(&mut self, chooser: PlayerId) -> Card;

    /// Whether `responder` plays a Nope on the top of `stack`.
    ///
    /// Only asked of players who hold a Nope.
    fn choose_nope(&mut self, _responder: PlayerId, _stack: &PendingStack) -> bool {
        false
    }

    /// Private reveal of the top cards (See the Future), top first.
    fn see_future(&mut self, _player: PlayerId, _cards: &[Card]) {}
}

impl<P: InputProvider + ?Sized> InputProvider for &mut P {
    fn choose_action(&mut self, player: &Player) -> Action {
        (**self).choose_action(player)
    }

    fn choose_target(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        (**self).choose_target(chooser, candidates)
    }

    fn choose_card_index(&mut self, chooser: PlayerId, bound: usize) -> usize {
        (**self).choose_card_index(chooser, bound)
    }

    fn choose_reinsertion_index(&mut self, chooser: PlayerId, deck_size: usize) -> usize {
        (**self).choose_reinsertion_index(chooser, deck_size)
    }

    fn choose_card_type(&mut self, chooser: PlayerId) -> Card {
        (**self).choose_card_type(chooser)
    }

    fn choose_nope(&mut self, responder: PlayerId, stack: &PendingStack) -> bool {
        (**self).choose_nope(responder, stack)
    }

    fn see_future(&mut self, player: PlayerId, cards: &[Card]) {
        (**self).see_future(player, cards)
    }
}
