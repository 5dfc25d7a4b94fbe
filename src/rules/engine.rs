//! The game loop.
//!
//! `Game` owns a match: its state, configuration, input provider, and
//! event sink. Each call to [`Game::act`] performs one action for the
//! active player and is atomic. If anything fails the state is restored
//! and no events are emitted for it.
//!
//! ## Driving a match
//!
//! - [`Game::run`] plays to completion, asking the input provider for
//!   every decision.
//! - [`Game::step`] performs one decision: invalid actions are reported
//!   as `ActionRejected` and the same player is asked again.
//! - [`Game::act`] applies a given action, for hosts that collect
//!   actions themselves.

use tracing::{debug, info, warn};

use super::phase::{GameResult, Phase, TurnStatus};
use crate::cards::Card;
use crate::core::{Action, GameConfig, GameError, GameState, Play, PlayerId};
use crate::effects::{DrawSource, EffectResolver, TurnControl};
use crate::events::{EventSink, GameEvent};
use crate::input::InputProvider;

/// A running match.
pub struct Game<I: InputProvider, S: EventSink> {
    config: GameConfig,
    state: GameState,
    input: I,
    sink: S,
    phase: Phase,
    /// Events of the action in progress, sent once it commits.
    pending_events: Vec<GameEvent>,
    /// `TurnStarted` already sent for the current turn.
    turn_announced: bool,
    result: Option<GameResult>,
}

impl<I: InputProvider, S: EventSink> Game<I, S> {
    /// Wrap an already set-up state. `GameBuilder` is the usual way in.
    pub fn from_state(config: GameConfig, state: GameState, input: I, sink: S) -> Self {
        Self {
            config,
            state,
            input,
            sink,
            phase: Phase::AwaitingAction,
            pending_events: Vec::new(),
            turn_announced: false,
            result: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active player, `None` once nobody is left.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.current_player()
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the match apart.
    pub fn into_parts(self) -> (GameState, I, S) {
        (self.state, self.input, self.sink)
    }

    // === Driving ===

    /// Play until the match ends.
    pub fn run(&mut self) -> GameResult {
        loop {
            if let TurnStatus::Finished(result) = self.step() {
                return result;
            }
        }
    }

    /// Ask the active player for one action and perform it.
    ///
    /// Validation errors are reported to the sink as `ActionRejected` and
    /// returned as `TurnStatus::Rejected`; the player is asked again on the
    /// next step.
    pub fn step(&mut self) -> TurnStatus {
        if let Some(result) = &self.result {
            return TurnStatus::Finished(result.clone());
        }
        if self.state.is_over() {
            let result = self.finish();
            self.flush();
            return TurnStatus::Finished(result);
        }
        let Some(actor) = self.state.current_player() else {
            return TurnStatus::Finished(self.abort(GameError::NoPlayersRemaining));
        };

        self.announce_turn(actor);
        let action = self.input.choose_action(&self.state.players[actor]);

        match self.act(action) {
            Ok(status) => status,
            Err(err) if err.is_fatal() => {
                TurnStatus::Finished(self.result.clone().unwrap_or(GameResult::Aborted { reason: err }))
            }
            Err(err) => {
                warn!("{} rejected: {}", actor, err);
                self.sink.notify(&GameEvent::ActionRejected {
                    player: actor,
                    error: err.clone(),
                });
                TurnStatus::Rejected(err)
            }
        }
    }

    /// Perform `action` for the active player.
    ///
    /// All or nothing: on error the state is rolled back. Structural
    /// errors (see [`GameError::is_fatal`]) also end the match.
    pub fn act(&mut self, action: Action) -> Result<TurnStatus, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        let Some(actor) = self.state.current_player() else {
            self.abort(GameError::NoPlayersRemaining);
            return Err(GameError::NoPlayersRemaining);
        };
        self.announce_turn(actor);

        let snapshot = self.state.snapshot();
        let outcome = match action {
            Action::Draw => self.draw(actor, DrawSource::Top),
            Action::Play(play) => self.play(actor, play),
        };

        match outcome {
            Ok(status) => {
                self.flush();
                Ok(status)
            }
            Err(err) => {
                self.state.restore(snapshot);
                self.pending_events.clear();
                self.phase = Phase::AwaitingAction;
                if err.is_fatal() {
                    self.abort(err.clone());
                }
                Err(err)
            }
        }
    }

    // === Turn steps ===

    fn play(&mut self, actor: PlayerId, play: Play) -> Result<TurnStatus, GameError> {
        self.phase = Phase::ResolvingEffect;
        let resolution =
            EffectResolver::resolve(&mut self.state, &self.config, &mut self.input, actor, play)?;

        self.emit(GameEvent::CardPlayed { player: actor, play });
        for &player in &resolution.nopers {
            self.emit(GameEvent::Noped { player });
        }
        self.emit(GameEvent::EffectResolved {
            player: actor,
            description: resolution.outcome.to_string(),
        });

        match resolution.control {
            TurnControl::Continue => {
                self.phase = Phase::AwaitingAction;
                Ok(TurnStatus::Continue)
            }
            TurnControl::EndTurn => self.end_turn(),
            TurnControl::Draw(source) => self.draw(actor, source),
        }
    }

    fn draw(&mut self, actor: PlayerId, source: DrawSource) -> Result<TurnStatus, GameError> {
        let card = match source {
            DrawSource::Top => self.state.deck.draw()?,
            DrawSource::Bottom => self.state.deck.draw_bottom()?,
        };
        self.emit(GameEvent::CardDrawn { player: actor });

        if card != Card::ExplodingKitten {
            debug!("{} draws {:?}", actor, card);
            self.state.players[actor].receive(card);
            return self.end_turn();
        }

        if self.state.players[actor].holds(Card::Defuse) {
            self.phase = Phase::AwaitingDefusePlacement;
            let defuse = self.state.players[actor].remove(Card::Defuse)?;
            self.state.discard(defuse);

            let deck_size = self.state.deck.len();
            let index = self.input.choose_reinsertion_index(actor, deck_size);
            self.state.deck.insert_at(Card::ExplodingKitten, index)?;
            debug!("{} defuses and puts the kitten back at {}", actor, index);

            self.emit(GameEvent::KittenDefused { player: actor });
            return self.end_turn();
        }

        self.eliminate(actor);
        if self.state.is_over() {
            return Ok(TurnStatus::Finished(self.finish()));
        }
        Ok(TurnStatus::Eliminated { player: actor })
    }

    /// Remove an exploded player. Their hand and the kitten are discarded.
    fn eliminate(&mut self, player: PlayerId) {
        self.phase = Phase::Eliminated;

        let exploded = &mut self.state.players[player];
        exploded.eliminate();
        exploded.set_extra_turns(0);
        let hand = exploded.take_hand();
        self.state.discard_all(hand);
        self.state.discard(Card::ExplodingKitten);
        self.state.turns.eliminate(player);

        info!("{} exploded, {} players remain", player, self.state.turns.len());
        self.emit(GameEvent::PlayerEliminated { player });

        // The seat after the exploded player starts a fresh turn
        self.start_next_turn();
    }

    fn end_turn(&mut self) -> Result<TurnStatus, GameError> {
        let next = self
            .state
            .turns
            .advance(&mut self.state.players)
            .ok_or(GameError::NoPlayersRemaining)?;
        self.start_next_turn();
        Ok(TurnStatus::TurnEnded { next })
    }

    fn start_next_turn(&mut self) {
        self.state.turn_number += 1;
        self.turn_announced = false;
        self.phase = Phase::AwaitingAction;
    }

    fn finish(&mut self) -> GameResult {
        let winner = self.state.winner();
        let result = winner.map_or(GameResult::NoWinner, GameResult::Winner);
        info!("game over after {} turns, winner: {:?}", self.state.turn_number, winner);

        self.phase = Phase::GameOver;
        self.emit(GameEvent::GameOver { winner });
        self.result = Some(result.clone());
        result
    }

    fn abort(&mut self, reason: GameError) -> GameResult {
        warn!("match aborted: {}", reason);
        let result = GameResult::Aborted { reason };
        self.phase = Phase::GameOver;
        self.sink.notify(&GameEvent::GameOver { winner: None });
        self.result = Some(result.clone());
        result
    }

    // === Events ===

    fn announce_turn(&mut self, player: PlayerId) {
        if self.turn_announced {
            return;
        }
        self.turn_announced = true;
        self.sink.notify(&GameEvent::TurnStarted {
            player,
            turn: self.state.turn_number,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    fn flush(&mut self) {
        for event in self.pending_events.drain(..) {
            self.sink.notify(&event);
        }
    }
}
