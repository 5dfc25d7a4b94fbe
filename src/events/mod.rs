//! Event notifications emitted by the game loop.

pub mod event;
pub mod sink;

pub use event::{EventKind, GameEvent};
pub use sink::{EventSink, NullSink, TracingSink};
