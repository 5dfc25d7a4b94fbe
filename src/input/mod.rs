//! Player decisions: the `InputProvider` trait and two stock providers.

pub mod provider;
pub mod random;
pub mod scripted;

pub use provider::InputProvider;
pub use random::RandomInput;
pub use scripted::ScriptedInput;
