//! Choice prompt trait definition.
//!
//! The [`ChoicePrompt`] trait is the one place the decision logic hands
//! control to a human. Every call resolves exactly once, either with a pick
//! or with a cancellation; adapter failures are reported separately as
//! [`PromptError`] so they are never mistaken for a user decision.

use async_trait::async_trait;

/// Result type alias for prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors raised by a prompt adapter.
///
/// These are failures of the UI plumbing, not decisions made by the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// The UI side went away before answering.
    #[error("prompt channel closed")]
    Closed,

    /// Terminal or other I/O failure.
    #[error("prompt I/O error: {0}")]
    Io(String),

    /// The UI answered with an index outside the offered choices.
    #[error("choice {index} is out of range for {count} options")]
    OutOfRange {
        /// Index returned by the UI.
        index: usize,
        /// Number of options presented.
        count: usize,
    },
}

/// Outcome of presenting a list of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The user picked the option at this index.
    Picked(usize),
    /// The user dismissed the prompt without picking.
    Cancelled,
}

/// Asks the user to pick one of several options.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChoicePrompt: Send + Sync {
    /// Presents `labels` under `title` and waits for the user to pick one or
    /// cancel. Waiting is unbounded.
    async fn present_choices(&self, title: &str, labels: &[String]) -> Result<Choice>;

    /// Shows an informational message and waits until it is dismissed.
    async fn alert(&self, title: &str, message: &str) -> Result<()>;
}
