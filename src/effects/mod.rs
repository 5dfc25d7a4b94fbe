//! Effect resolution for played cards and combos.
//!
//! - `EffectResolver`: validates a play and applies it atomically
//! - `TargetRule` / `TargetSelector`: who a play may target
//! - `Outcome` / `Resolution`: structured result of a resolved play
//!
//! Results come back as values; nothing is signalled through errors
//! except genuine failures.

mod outcome;
mod resolver;
mod targeting;

pub use outcome::{DrawSource, Outcome, Resolution, TurnControl};
pub use resolver::{EffectResolver, REWIND_DEPTH};
pub use targeting::{TargetRule, TargetSelector};
