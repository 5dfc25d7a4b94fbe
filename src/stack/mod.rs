//! Pending effects and the Nope response window.
//!
//! A declared play does not resolve immediately: it becomes the bottom of
//! a `PendingStack`, and `NopeWindow` gives every other Nope holder a
//! chance to answer. An odd number of Nopes cancels the play.

mod pending;
mod window;

pub use pending::{PendingEffect, PendingId, PendingKind, PendingStack};
pub use window::{NopeWindow, WindowOutcome};
