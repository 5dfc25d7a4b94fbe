//! # kitten-engine
//!
//! A rules engine for Exploding Kittens-style elimination card games
//! (2-5 players).
//!
//! ## Design Principles
//!
//! 1. **Explicit Instances**: A match is a `Game` value owning its deck,
//!    players, and turn order. Nothing is global, so any number of matches
//!    can run side by side.
//!
//! 2. **Injected Collaborators**: Player decisions come from an
//!    `InputProvider`, notifications go to an `EventSink`, randomness comes
//!    from a seeded `GameRng`. Tests script all three.
//!
//! 3. **All or Nothing**: Every action resolves against a snapshot and is
//!    rolled back on error. A rejected play leaves no partial state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Deck, discard pile, and hands use
//!   `im-rs`, so snapshotting the state before an action is O(1).
//!
//! - **Owed-Turn Counter**: Attacks add to a per-player counter instead of
//!   duplicating seats. An attacked player who attacks back passes on the
//!   turns they still owe plus two more, so chained Attacks compound.
//!
//! - **Nope Window**: Declared plays wait on a pending stack while other
//!   players may answer with Nope; an odd number of Nopes cancels.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Card values, the deck, composition tables
//! - `turns`: Turn order, owed turns, elimination
//! - `effects`: Effect resolution and targeting
//! - `stack`: Pending effects and the Nope window
//! - `events`: Notifications and sinks
//! - `input`: Input-provider trait, scripted and random providers
//! - `rules`: Setup, the game loop, and the win condition
//!
//! ## Example
//!
//! ```
//! use kitten_engine::{GameBuilder, NullSink, RandomInput};
//!
//! let mut game = GameBuilder::new()
//!     .player_count(4)
//!     .seed(7)
//!     .build(RandomInput::from_seed(7), NullSink)
//!     .unwrap();
//!
//! let result = game.run();
//! assert!(result.winner().is_some());
//! ```

pub mod core;
pub mod cards;
pub mod turns;
pub mod effects;
pub mod stack;
pub mod events;
pub mod input;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerMap,
    GameRng, GameConfig,
    Action, Play,
    GameState, GameError,
};

pub use crate::cards::{Breed, Card, CompositionEntry, Deck, DeckComposition};

pub use crate::turns::{Direction, TurnOrder};

pub use crate::effects::{
    DrawSource, EffectResolver, Outcome, Resolution, TargetRule, TargetSelector, TurnControl,
};

pub use crate::stack::{NopeWindow, PendingEffect, PendingId, PendingKind, PendingStack};

pub use crate::events::{EventKind, EventSink, GameEvent, NullSink, TracingSink};

pub use crate::input::{InputProvider, RandomInput, ScriptedInput};

pub use crate::rules::{Game, GameBuilder, GameResult, Phase, TurnStatus};
