//! Prompt for runs without a user at the keyboard.

use async_trait::async_trait;

use super::traits::{Choice, ChoicePrompt, Result};

/// [`ChoicePrompt`] that cancels every choice.
///
/// Useful for scripted runs: an ambiguous account yields a declined
/// selection instead of blocking on input. Alerts are logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractivePrompt;

#[async_trait]
impl ChoicePrompt for NonInteractivePrompt {
    async fn present_choices(&self, title: &str, labels: &[String]) -> Result<Choice> {
        tracing::info!(
            title,
            options = labels.len(),
            "Prompt skipped in non-interactive mode"
        );
        Ok(Choice::Cancelled)
    }

    async fn alert(&self, title: &str, message: &str) -> Result<()> {
        tracing::warn!("{}: {}", title, message);
        Ok(())
    }
}
