//! Scripted input for tests and replays.
//!
//! Answers are queued per decision kind and consumed in order. When a
//! queue runs dry the provider falls back to a safe legal answer (draw,
//! first candidate, index 0, bottom of the deck, pass on Nope), so a
//! scripted game always makes progress.

use std::collections::VecDeque;

use super::provider::InputProvider;
use crate::cards::Card;
use crate::core::{Action, Player, PlayerId};
use crate::stack::PendingStack;

/// Input provider answering from queues.
///
/// ```
/// use kitten_engine::cards::Card;
/// use kitten_engine::core::{Action, Player, PlayerId};
/// use kitten_engine::input::{InputProvider, ScriptedInput};
///
/// let mut input = ScriptedInput::new()
///     .with_actions([Action::card(Card::Skip)])
///     .with_reinsertions([2]);
///
/// let player = Player::new(PlayerId::new(0), "Ada");
/// assert_eq!(input.choose_action(&player), Action::card(Card::Skip));
/// assert_eq!(input.choose_action(&player), Action::Draw);
/// assert_eq!(input.choose_reinsertion_index(PlayerId::new(0), 10), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<Action>,
    targets: VecDeque<PlayerId>,
    card_indices: VecDeque<usize>,
    reinsertions: VecDeque<usize>,
    card_types: VecDeque<Card>,
    nopes: VecDeque<bool>,
    revealed: Vec<(PlayerId, Vec<Card>)>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = PlayerId>) -> Self {
        self.targets.extend(targets);
        self
    }

    #[must_use]
    pub fn with_card_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.card_indices.extend(indices);
        self
    }

    #[must_use]
    pub fn with_reinsertions(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.reinsertions.extend(indices);
        self
    }

    #[must_use]
    pub fn with_card_types(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.card_types.extend(cards);
        self
    }

    #[must_use]
    pub fn with_nopes(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.nopes.extend(answers);
        self
    }

    /// Queue another action.
    pub fn push_action(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn remaining_actions(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn remaining_nopes(&self) -> usize {
        self.nopes.len()
    }

    /// Every private reveal so far, in order.
    #[must_use]
    pub fn revealed(&self) -> &[(PlayerId, Vec<Card>)] {
        &self.revealed
    }
}

impl InputProvider for ScriptedInput {
    fn choose_action(&mut self, _player: &Player) -> Action {
        self.actions.pop_front().unwrap_or(Action::Draw)
    }

    fn choose_target(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        self.targets
            .pop_front()
            .or_else(|| candidates.first().copied())
            .unwrap_or(chooser)
    }

    fn choose_card_index(&mut self, _chooser: PlayerId, _bound: usize) -> usize {
        self.card_indices.pop_front().unwrap_or(0)
    }

    fn choose_reinsertion_index(&mut self, _chooser: PlayerId, deck_size: usize) -> usize {
        self.reinsertions.pop_front().unwrap_or(deck_size)
    }

    fn choose_card_type(&mut self, _chooser: PlayerId) -> Card {
        self.card_types.pop_front().unwrap_or(Card::Defuse)
    }

    fn choose_nope(&mut self, _responder: PlayerId, _stack: &PendingStack) -> bool {
        self.nopes.pop_front().unwrap_or(false)
    }

    fn see_future(&mut self, player: PlayerId, cards: &[Card]) {
        self.revealed.push((player, cards.to_vec()));
    }
}
