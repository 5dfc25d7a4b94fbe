//! Turn order: who acts next, owed turns, and elimination.

pub mod order;

pub use order::{Direction, TurnOrder};
