//! The Nope response window.
//!
//! After a play is declared, players who hold a Nope get a chance to
//! answer, in turn order starting after whoever controls the top entry.
//! A Nope goes on the stack and polling restarts from its controller;
//! the window closes once every eligible player passes in a row.

use tracing::debug;

use super::pending::{PendingKind, PendingStack};
use crate::cards::Card;
use crate::core::{GameError, GameState, Play, PlayerId};
use crate::input::InputProvider;

/// Result of a closed Nope window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowOutcome {
    /// Players who played a Nope, in order.
    pub nopers: Vec<PlayerId>,

    /// Whether the play ends up cancelled.
    pub cancelled: bool,
}

/// Runs the response window for one declared play.
pub struct NopeWindow;

impl NopeWindow {
    /// Poll for Nopes on `play` declared by `actor`.
    ///
    /// Each Nope is removed from its holder's hand and discarded.
    pub fn run<I: InputProvider + ?Sized>(
        state: &mut GameState,
        input: &mut I,
        actor: PlayerId,
        play: Play,
    ) -> Result<WindowOutcome, GameError> {
        let mut stack = PendingStack::new();
        stack.push(actor, PendingKind::Play(play));
        let mut nopers = Vec::new();

        'window: loop {
            let Some(top) = stack.top().copied() else {
                break;
            };

            for responder in state.turns.others(top.controller) {
                let holds_nope = state
                    .player(responder)
                    .is_some_and(|p| p.holds(Card::Nope));
                if !holds_nope || !input.choose_nope(responder, &stack) {
                    continue;
                }

                let card = state
                    .player_mut(responder)
                    .ok_or(GameError::NothingToNope)?
                    .remove(Card::Nope)?;
                state.discard(card);
                stack.push(responder, PendingKind::Nope);
                nopers.push(responder);
                debug!("{} nopes ({} on the stack)", responder, stack.nope_count());
                continue 'window;
            }

            break;
        }

        Ok(WindowOutcome {
            cancelled: stack.is_cancelled(),
            nopers,
        })
    }
}
