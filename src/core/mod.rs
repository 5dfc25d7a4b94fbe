//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything here is independent of how cards resolve. The effect
//! resolver and game loop build on these types.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
pub use action::{Action, Play};
pub use state::GameState;
pub use error::GameError;
