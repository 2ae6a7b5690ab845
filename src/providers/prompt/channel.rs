//! Channel-backed prompt for UI event loops.
//!
//! Instead of drawing anything itself, [`ChannelChoicePrompt`] sends a
//! [`PromptRequest`] to the UI loop over an mpsc channel and awaits the answer
//! on a oneshot channel carried inside the request.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::traits::{Choice, ChoicePrompt, PromptError, Result};

/// A request for the UI loop to show something to the user.
#[derive(Debug)]
pub enum PromptRequest {
    /// Show a list of options; answer with the user's choice.
    Choose {
        /// Dialog title.
        title: String,
        /// Option labels, in display order.
        labels: Vec<String>,
        /// Where to send the answer.
        respond_to: oneshot::Sender<Choice>,
    },
    /// Show a message; answer once it has been dismissed.
    Alert {
        /// Dialog title.
        title: String,
        /// Message body.
        message: String,
        /// Signalled on dismissal.
        respond_to: oneshot::Sender<()>,
    },
}

/// [`ChoicePrompt`] that forwards requests to a UI loop.
#[derive(Debug, Clone)]
pub struct ChannelChoicePrompt {
    tx: mpsc::UnboundedSender<PromptRequest>,
}

impl ChannelChoicePrompt {
    /// Creates a prompt that sends requests on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<PromptRequest>) -> Self {
        Self { tx }
    }

    /// Creates a prompt together with the receiver the UI loop should drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PromptRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl ChoicePrompt for ChannelChoicePrompt {
    async fn present_choices(&self, title: &str, labels: &[String]) -> Result<Choice> {
        let (respond_to, response) = oneshot::channel();

        self.tx
            .send(PromptRequest::Choose {
                title: title.to_string(),
                labels: labels.to_vec(),
                respond_to,
            })
            .map_err(|_| PromptError::Closed)?;

        response.await.map_err(|_| PromptError::Closed)
    }

    async fn alert(&self, title: &str, message: &str) -> Result<()> {
        let (respond_to, response) = oneshot::channel();

        self.tx
            .send(PromptRequest::Alert {
                title: title.to_string(),
                message: message.to_string(),
                respond_to,
            })
            .map_err(|_| PromptError::Closed)?;

        response.await.map_err(|_| PromptError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn choice_round_trip() {
        let (prompt, mut rx) = ChannelChoicePrompt::channel();

        let ui = tokio::spawn(async move {
            match rx.recv().await {
                Some(PromptRequest::Choose {
                    title,
                    labels,
                    respond_to,
                }) => {
                    assert_eq!(title, "Choose an account");
                    assert_eq!(labels, vec!["a@x.com".to_string(), "b@y.com".to_string()]);
                    respond_to.send(Choice::Picked(1)).unwrap();
                }
                other => panic!("unexpected request: {:?}", other),
            }
        });

        let labels = vec!["a@x.com".to_string(), "b@y.com".to_string()];
        let choice = prompt
            .present_choices("Choose an account", &labels)
            .await
            .unwrap();
        assert_eq!(choice, Choice::Picked(1));
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn alert_round_trip() {
        let (prompt, mut rx) = ChannelChoicePrompt::channel();

        let ui = tokio::spawn(async move {
            if let Some(PromptRequest::Alert {
                message,
                respond_to,
                ..
            }) = rx.recv().await
            {
                assert!(message.contains("account"));
                respond_to.send(()).unwrap();
            } else {
                panic!("expected alert");
            }
        });

        prompt
            .alert("No account found", "Add an account and try again.")
            .await
            .unwrap();
        ui.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_receiver_is_closed() {
        let (prompt, rx) = ChannelChoicePrompt::channel();
        drop(rx);

        let result = prompt.present_choices("t", &["a".to_string()]).await;
        assert_eq!(result, Err(PromptError::Closed));
    }

    #[tokio::test]
    async fn dropped_responder_is_closed() {
        let (prompt, mut rx) = ChannelChoicePrompt::channel();

        let ui = tokio::spawn(async move {
            // Receive and drop the request without answering.
            let _ = rx.recv().await;
        });

        let result = prompt.present_choices("t", &["a".to_string()]).await;
        assert_eq!(result, Err(PromptError::Closed));
        ui.await.unwrap();
    }
}
