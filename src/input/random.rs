//! Uniform random input.
//!
//! Makes random legal choices from a deterministic `GameRng`. Used to
//! simulate full matches in tests; it is not meant as an opponent.

use super::provider::InputProvider;
use crate::cards::{Breed, Card};
use crate::core::{Action, GameRng, Play, Player, PlayerId};
use crate::stack::PendingStack;

/// Cards a random player may ask for with a Cat Request.
const REQUESTABLE: [Card; 7] = [
    Card::Defuse,
    Card::Attack,
    Card::Skip,
    Card::Favor,
    Card::Shuffle,
    Card::SeeTheFuture,
    Card::Nope,
];

/// Input provider making uniform random choices.
#[derive(Clone, Debug)]
pub struct RandomInput {
    rng: GameRng,
    play_probability: f64,
    nope_probability: f64,
}

impl RandomInput {
    /// Create a provider driven by `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            play_probability: 0.5,
            nope_probability: 0.3,
        }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// A provider on its own stream split off `rng`.
    #[must_use]
    pub fn forked(rng: &mut GameRng) -> Self {
        Self::new(rng.fork())
    }

    /// Chance of playing something (when anything is playable) instead of
    /// drawing.
    #[must_use]
    pub fn with_play_probability(mut self, probability: f64) -> Self {
        self.play_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Chance of answering with a Nope when holding one.
    #[must_use]
    pub fn with_nope_probability(mut self, probability: f64) -> Self {
        self.nope_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Every play `player` could legally declare.
    #[must_use]
    pub fn legal_plays(player: &Player) -> Vec<Play> {
        let mut cards: Vec<Card> = player
            .hand()
            .iter()
            .copied()
            .filter(|c| c.is_action())
            .collect();
        cards.sort();
        cards.dedup();

        let mut plays: Vec<Play> = cards.into_iter().map(Play::Card).collect();
        for breed in Breed::ALL {
            if player.has_triplet(breed) {
                plays.push(Play::Triplet(breed));
            }
            if player.count_of(breed) >= 2 && player.holds(Card::CatRequest) {
                plays.push(Play::Request(breed));
            }
        }
        plays
    }
}

impl InputProvider for RandomInput {
    fn choose_action(&mut self, player: &Player) -> Action {
        let plays = Self::legal_plays(player);
        if plays.is_empty() || !self.rng.gen_bool(self.play_probability) {
            return Action::Draw;
        }
        self.rng
            .choose(&plays)
            .map_or(Action::Draw, |&play| Action::Play(play))
    }

    fn choose_target(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        self.rng.choose(candidates).copied().unwrap_or(chooser)
    }

    fn choose_card_index(&mut self, _chooser: PlayerId, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range_usize(0..bound)
    }

    fn choose_reinsertion_index(&mut self, _chooser: PlayerId, deck_size: usize) -> usize {
        self.rng.gen_range_usize(0..deck_size + 1)
    }

    fn choose_card_type(&mut self, _chooser: PlayerId) -> Card {
        let breeds = Breed::ALL.map(Card::Cat);
        let index = self.rng.gen_range_usize(0..REQUESTABLE.len() + breeds.len());
        REQUESTABLE
            .get(index)
            .or_else(|| breeds.get(index - REQUESTABLE.len()))
            .copied()
            .unwrap_or(Card::Defuse)
    }

    fn choose_nope(&mut self, _responder: PlayerId, _stack: &PendingStack) -> bool {
        self.rng.gen_bool(self.nope_probability)
    }
}
