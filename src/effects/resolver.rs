//! Effect resolution.
//!
//! `EffectResolver::resolve` runs one play from declaration to result:
//!
//! 1. Validate the play against the actor's hand (and the deck, for
//!    Time Rewind).
//! 2. Pick the target, if the play has one.
//! 3. Move the played cards from the hand to the discard pile.
//! 4. Open the Nope window.
//! 5. Apply the effect, unless it was noped.
//!
//! The whole sequence is atomic: the state is snapshotted first and
//! restored if any step fails, so a rejected play leaves no trace.

use tracing::{debug, warn};

use super::outcome::{DrawSource, Outcome, Resolution, TurnControl};
use super::targeting::{TargetRule, TargetSelector};
use crate::cards::Card;
use crate::core::{GameConfig, GameError, GameState, Play, PlayerId};
use crate::input::InputProvider;
use crate::stack::NopeWindow;

/// Cards moved from top to bottom by Time Rewind.
pub const REWIND_DEPTH: usize = 3;

/// Resolves plays against a game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `play` by `actor`, all or nothing.
    pub fn resolve<I: InputProvider + ?Sized>(
        state: &mut GameState,
        config: &GameConfig,
        input: &mut I,
        actor: PlayerId,
        play: Play,
    ) -> Result<Resolution, GameError> {
        let snapshot = state.snapshot();
        match Self::resolve_inner(state, config, input, actor, play) {
            Ok(resolution) => Ok(resolution),
            Err(err) => {
                warn!("{} playing {} rolled back: {}", actor, play, err);
                state.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Check that `actor` may declare `play` right now.
    pub fn validate(state: &GameState, actor: PlayerId, play: Play) -> Result<(), GameError> {
        if !state.is_alive(actor) {
            return Err(GameError::target(actor, "not in the turn order"));
        }
        let player = &state.players[actor];

        match play {
            Play::Card(card) => {
                match card {
                    Card::ExplodingKitten | Card::Defuse => {
                        return Err(GameError::UnplayableCard { card })
                    }
                    Card::Nope => return Err(GameError::NothingToNope),
                    Card::Cat(breed) => {
                        return Err(GameError::combo(format!(
                            "a single {breed} has no effect"
                        )))
                    }
                    Card::CatRequest => {
                        return Err(GameError::combo("Cat Request needs two matching cat cards"))
                    }
                    _ => {}
                }
                if !player.holds(card) {
                    return Err(GameError::CardNotInHand { player: actor, card });
                }
                if card == Card::TimeRewind && state.deck.len() < REWIND_DEPTH {
                    return Err(GameError::InvalidDeckOperation {
                        operation: "rewind",
                        index: REWIND_DEPTH,
                        size: state.deck.len(),
                    });
                }
            }
            Play::Triplet(breed) => {
                let held = player.count_of(breed);
                if held < 3 {
                    return Err(GameError::combo(format!(
                        "three {breed} needed, {held} held"
                    )));
                }
            }
            Play::Request(breed) => {
                let held = player.count_of(breed);
                if held < 2 {
                    return Err(GameError::combo(format!(
                        "two {breed} needed, {held} held"
                    )));
                }
                if !player.holds(Card::CatRequest) {
                    return Err(GameError::combo("no Cat Request in hand"));
                }
            }
        }
        Ok(())
    }

    fn resolve_inner<I: InputProvider + ?Sized>(
        state: &mut GameState,
        config: &GameConfig,
        input: &mut I,
        actor: PlayerId,
        play: Play,
    ) -> Result<Resolution, GameError> {
        Self::validate(state, actor, play)?;

        let target = match TargetRule::for_play(play) {
            Some(rule) => Some(TargetSelector::select(state, input, actor, rule)?),
            None => None,
        };

        let cards = play.cards();
        state.players[actor].remove_all(&cards)?;
        state.discard_all(cards.iter().copied());
        debug!("{} plays {}", actor, play);

        let window = NopeWindow::run(state, input, actor, play)?;
        if window.cancelled {
            debug!("{} by {} was noped", play, actor);
            return Ok(Resolution {
                play,
                outcome: Outcome::Noped,
                control: TurnControl::Continue,
                nopers: window.nopers,
            });
        }

        let (outcome, control) = Self::apply(state, config, input, actor, play, target)?;
        debug!("{} {}", actor, outcome);
        Ok(Resolution {
            play,
            outcome,
            control,
            nopers: window.nopers,
        })
    }

    fn apply<I: InputProvider + ?Sized>(
        state: &mut GameState,
        config: &GameConfig,
        input: &mut I,
        actor: PlayerId,
        play: Play,
        target: Option<PlayerId>,
    ) -> Result<(Outcome, TurnControl), GameError> {
        let require_target = || target.ok_or_else(|| GameError::target(actor, "no eligible target"));

        let resolved = match play {
            Play::Card(Card::Skip) => (Outcome::Skipped { turns: 1 }, TurnControl::EndTurn),

            Play::Card(Card::DoubleSkip) => {
                let player = &mut state.players[actor];
                let turns = player.extra_turns().clamp(1, 2);
                player.set_extra_turns(player.extra_turns().saturating_sub(1));
                (Outcome::Skipped { turns }, TurnControl::EndTurn)
            }

            Play::Card(Card::SuperSkip) => {
                let player = &mut state.players[actor];
                let turns = player.extra_turns().max(1);
                player.set_extra_turns(0);
                (Outcome::Skipped { turns }, TurnControl::EndTurn)
            }

            Play::Card(Card::Attack) => {
                let target = require_target()?;
                // Turns the attacker still owes pass on with the attack
                let passed = state.players[actor].extra_turns();
                state.players[actor].set_extra_turns(0);
                state.players[target].add_extra_turns(passed + config.attack_turns);
                let owed = state.players[target].extra_turns();
                (Outcome::Attacked { target, owed }, TurnControl::EndTurn)
            }

            Play::Card(Card::Shuffle) => {
                state.deck.shuffle(&mut state.rng);
                (Outcome::Shuffled, TurnControl::Continue)
            }

            Play::Card(Card::SeeTheFuture) => {
                let cards = state.deck.peek_top(config.see_the_future_depth);
                input.see_future(actor, &cards);
                (Outcome::Foresaw(cards), TurnControl::Continue)
            }

            Play::Card(Card::Favor) => {
                let from = require_target()?;
                let card = match state.players[from].hand_len() {
                    0 => None,
                    bound => {
                        let index = input.choose_card_index(from, bound);
                        Some(Self::transfer(state, from, actor, index)?)
                    }
                };
                (Outcome::Favored { from, card }, TurnControl::Continue)
            }

            Play::Triplet(_) => {
                let from = require_target()?;
                let card = match state.players[from].hand_len() {
                    0 => None,
                    bound => {
                        let index = input.choose_card_index(actor, bound);
                        Some(Self::transfer(state, from, actor, index)?)
                    }
                };
                (Outcome::Stolen { from, card }, TurnControl::Continue)
            }

            Play::Request(_) => {
                let from = require_target()?;
                let requested = input.choose_card_type(actor);
                let received = match state.players[from].remove(requested) {
                    Ok(card) => {
                        state.players[actor].receive(card);
                        true
                    }
                    Err(_) => false,
                };
                (
                    Outcome::Requested { from, requested, received },
                    TurnControl::Continue,
                )
            }

            Play::Card(Card::DrawFromBottom) => {
                (Outcome::BottomDraw, TurnControl::Draw(DrawSource::Bottom))
            }

            Play::Card(Card::Reverse) => {
                state.turns.reverse();
                (Outcome::Reversed, TurnControl::EndTurn)
            }

            Play::Card(Card::SwitchDeckByHalf) => {
                state.deck.switch_halves();
                (Outcome::HalvesSwitched, TurnControl::Continue)
            }

            Play::Card(Card::TimeRewind) => {
                state.deck.rewind(REWIND_DEPTH)?;
                (Outcome::Rewound, TurnControl::Continue)
            }

            Play::Card(Card::Snatch) => {
                let from = require_target()?;
                let card = match state.players[from].hand_len() {
                    0 => None,
                    bound => {
                        let index = state.rng.gen_range_usize(0..bound);
                        Some(Self::transfer(state, from, actor, index)?)
                    }
                };
                (Outcome::Snatched { from, card }, TurnControl::Continue)
            }

            Play::Card(
                card @ (Card::ExplodingKitten
                | Card::Defuse
                | Card::Nope
                | Card::CatRequest
                | Card::Cat(_)),
            ) => return Err(GameError::UnplayableCard { card }),
        };
        Ok(resolved)
    }

    /// Move the card at `index` in `from`'s hand to `to`.
    ///
    /// Targets are checked for cards before the Nope window, but Nopes
    /// spent in the window can empty a hand. Callers skip the transfer then.
    fn transfer(state: &mut GameState, from: PlayerId, to: PlayerId, index: usize) -> Result<Card, GameError> {
        let card = state.players[from].take_at(index)?;
        state.players[to].receive(card);
        Ok(card)
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

    fn state(hands: &[&[Card]], deck: &[Card]) -> GameState {
        let mut players = PlayerMap::new(hands.len(), |id| Player::new(id, format!("P{}", id.0)));
        for (i, hand) in hands.iter().enumerate() {
            for &card in *hand {
                players[p(i as u8)].receive(card);
            }
        }
        GameState::new(players, Deck::from_cards(deck.iter().copied()), GameRng::new(3))
    }

    fn resolve(state: &mut GameState, input: &mut ScriptedInput, play: Play) -> Result<Resolution, GameError> {
        EffectResolver::resolve(state, &GameConfig::default(), input, p(0), play)
    }

    #[test]
    fn test_skip_ends_turn() {
        let mut state = state(&[&[Card::Skip], &[]], &[]);
        let resolution = resolve(&mut state, &mut ScriptedInput::new(), Play::Card(Card::Skip)).unwrap();

        assert_eq!(resolution.outcome, Outcome::Skipped { turns: 1 });
        assert_eq!(resolution.control, TurnControl::EndTurn);
        assert_eq!(state.players[p(0)].hand_len(), 0);
        assert_eq!(state.discard.len(), 1);
    }

    #[test]
    fn test_attack_passes_owed_turns_to_next_player() {
        let mut state = state(&[&[Card::Attack], &[], &[]], &[]);
        state.players[p(0)].set_extra_turns(2);

        let resolution = resolve(&mut state, &mut ScriptedInput::new(), Play::Card(Card::Attack)).unwrap();

        assert_eq!(resolution.outcome, Outcome::Attacked { target: p(1), owed: 4 });
        assert_eq!(resolution.control, TurnControl::EndTurn);
        assert_eq!(state.players[p(0)].extra_turns(), 0);
        assert_eq!(state.players[p(2)].extra_turns(), 0);
    }

    #[test]
    fn test_attack_on_single_turn_adds_two() {
        let mut state = state(&[&[Card::Attack], &[]], &[]);

        let resolution = resolve(&mut state, &mut ScriptedInput::new(), Play::Card(Card::Attack)).unwrap();

        assert_eq!(resolution.outcome, Outcome::Attacked { target: p(1), owed: 2 });
    }

    #[test]
    fn test_unplayable_cards() {
        let mut state = state(&[&[Card::Defuse, Card::Nope, Card::Cat(Breed::Tacocat)], &[]], &[]);
        let mut input = ScriptedInput::new();

        assert_eq!(
            resolve(&mut state, &mut input, Play::Card(Card::Defuse)),
            Err(GameError::UnplayableCard { card: Card::Defuse })
        );
        assert_eq!(
            resolve(&mut state, &mut input, Play::Card(Card::Nope)),
            Err(GameError::NothingToNope)
        );
        assert!(matches!(
            resolve(&mut state, &mut input, Play::Card(Card::Cat(Breed::Tacocat))),
            Err(GameError::InvalidCombo { .. })
        ));
        assert_eq!(state.players[p(0)].hand_len(), 3);
    }

    #[test]
    fn test_card_not_in_hand() {
        let mut state = state(&[&[], &[]], &[]);
        assert_eq!(
            resolve(&mut state, &mut ScriptedInput::new(), Play::Card(Card::Shuffle)),
            Err(GameError::CardNotInHand { player: p(0), card: Card::Shuffle })
        );
    }

    #[test]
    fn test_failed_favor_rolls_back() {
        let mut state = state(&[&[Card::Favor], &[Card::Skip]], &[]);
        // Target answers with an index past the end of their hand
        let mut input = ScriptedInput::new().with_card_indices([5]);

        let err = resolve(&mut state, &mut input, Play::Card(Card::Favor)).unwrap_err();

        assert_eq!(err, GameError::InvalidCardIndex { index: 5, bound: 1 });
        assert!(state.players[p(0)].holds(Card::Favor));
        assert!(state.players[p(1)].holds(Card::Skip));
        assert!(state.discard.is_empty());
    }

    #[test]
    fn test_time_rewind_needs_three_cards() {
        let mut state = state(&[&[Card::TimeRewind], &[]], &[Card::Skip, Card::Attack]);
        let err = resolve(&mut state, &mut ScriptedInput::new(), Play::Card(Card::TimeRewind)).unwrap_err();

        assert!(matches!(err, GameError::InvalidDeckOperation { operation: "rewind", .. }));
        assert!(state.players[p(0)].holds(Card::TimeRewind));
    }
}
