//! Game loop: setup, turn phases, and the win condition.
//!
//! - `GameBuilder`: deals a match from a configuration and seed
//! - `Game`: runs the match, one atomic action at a time
//! - `Phase` / `TurnStatus` / `GameResult`: where the loop is and how it ended

mod builder;
mod engine;
mod phase;

pub use builder::GameBuilder;
pub use engine::Game;
pub use phase::{GameResult, Phase, TurnStatus};
