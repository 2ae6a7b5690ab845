//! User choice prompts.
//!
//! This module contains the [`ChoicePrompt`] trait and its implementations:
//!
//! - [`ChannelChoicePrompt`] - hands requests to a UI event loop over channels
//! - [`TerminalPrompt`] - numbered menu on a terminal
//! - [`NonInteractivePrompt`] - cancels every choice, for scripted runs

mod channel;
mod non_interactive;
mod terminal;
mod traits;

pub use channel::{ChannelChoicePrompt, PromptRequest};
pub use non_interactive::NonInteractivePrompt;
pub use terminal::TerminalPrompt;
#[cfg(test)]
pub use traits::MockChoicePrompt;
pub use traits::{Choice, ChoicePrompt, PromptError, Result};
