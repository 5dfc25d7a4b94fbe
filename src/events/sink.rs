//! Event sinks.
//!
//! The game loop pushes every `GameEvent` into an `EventSink`. Hosts
//! implement the trait to render events; tests collect them in a `Vec`.

use tracing::{debug, info, warn};

use super::event::GameEvent;

/// Receiver of game notifications.
pub trait EventSink {
    /// Called once per event, in the order events happen.
    fn notify(&mut self, event: &GameEvent);
}

/// Collects events for later inspection.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Forwards events to `tracing`.
///
/// Rejections log at `warn`, eliminations and game over at `info`,
/// everything else at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ActionRejected { .. } => warn!("{}", event),
            GameEvent::PlayerEliminated { .. } | GameEvent::GameOver { .. } => info!("{}", event),
            _ => debug!("{}", event),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
