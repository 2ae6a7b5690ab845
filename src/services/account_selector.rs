//! Account selection service.
//!
//! Decides which account the rest of the application acts as:
//! - No candidates: nothing to act as
//! - One candidate: use it
//! - Several candidates: reuse the remembered choice, else the hint, else
//!   ask the user
//!
//! The remembered choice lives for as long as the selector does and is only
//! cleared by [`AccountSelector::reset`].

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::Account;
use crate::providers::directory::AccountSource;
use crate::providers::prompt::{Choice, ChoicePrompt, PromptError};

/// Title of the account choice dialog.
pub const CHOOSE_ACCOUNT_TITLE: &str = "Choose an account";

/// Errors that can occur during account selection.
///
/// Running out of accounts or the user declining are outcomes, not errors;
/// see [`Selection`].
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The prompt failed to deliver an answer.
    #[error("account prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

/// Result type for account selection.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Outcome of one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// An account was chosen.
    Resolved(Account),
    /// There are no accounts to choose from.
    NoneFound,
    /// The user dismissed the choice without picking.
    Declined,
}

impl Selection {
    /// Returns the chosen account, if any.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Selection::Resolved(account) => Some(account),
            Selection::NoneFound | Selection::Declined => None,
        }
    }
}

/// Service that resolves the active account, prompting only when ambiguous.
///
/// The last chosen account is guarded by an async mutex held for the whole
/// selection, prompt included, so concurrent callers sharing one selector are
/// served one at a time and never race on the remembered choice.
pub struct AccountSelector<P: ChoicePrompt> {
    prompt: P,
    last_chosen: Mutex<Option<Account>>,
}

impl<P: ChoicePrompt> AccountSelector<P> {
    /// Creates a selector with nothing remembered.
    pub fn new(prompt: P) -> Self {
        Self {
            prompt,
            last_chosen: Mutex::new(None),
        }
    }

    /// Returns the prompt used for ambiguous selections.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Picks one of `candidates`.
    ///
    /// `hint` is the name of a previously used account; it is matched exactly
    /// and only consulted when nothing is remembered yet.
    pub async fn select(
        &self,
        candidates: &[Account],
        hint: Option<&str>,
    ) -> SelectorResult<Selection> {
        let mut last_chosen = self.last_chosen.lock().await;

        match candidates {
            [] => {
                tracing::error!("No matching accounts found");
                return Ok(Selection::NoneFound);
            }
            // A single account is not a choice, so it is not remembered.
            [only] => {
                tracing::debug!(account = %only.name, "Single account available");
                return Ok(Selection::Resolved(only.clone()));
            }
            _ => {}
        }

        if let Some(account) = last_chosen.as_ref() {
            tracing::debug!(account = %account.name, "Reusing remembered account");
            return Ok(Selection::Resolved(account.clone()));
        }

        if let Some(hint) = hint.filter(|hint| !hint.is_empty()) {
            if let Some(account) = candidates.iter().find(|account| account.name == hint) {
                tracing::debug!(account = %account.name, "Account matched hint");
                *last_chosen = Some(account.clone());
                return Ok(Selection::Resolved(account.clone()));
            }
        }

        tracing::info!(
            count = candidates.len(),
            "Multiple matching accounts found, asking user"
        );
        let labels: Vec<String> = candidates.iter().map(|a| a.name.clone()).collect();

        match self
            .prompt
            .present_choices(CHOOSE_ACCOUNT_TITLE, &labels)
            .await?
        {
            Choice::Picked(index) => {
                let account = candidates
                    .get(index)
                    .cloned()
                    .ok_or(PromptError::OutOfRange {
                        index,
                        count: candidates.len(),
                    })?;
                tracing::info!(account = %account.name, "User picked account");
                *last_chosen = Some(account.clone());
                Ok(Selection::Resolved(account))
            }
            Choice::Cancelled => {
                tracing::info!("User declined to pick an account");
                Ok(Selection::Declined)
            }
        }
    }

    /// Lists the accounts of `account_type` from `source` and selects one.
    ///
    /// A source failure is treated as having no accounts.
    pub async fn choose_account<S>(
        &self,
        source: &S,
        account_type: &str,
        hint: Option<&str>,
    ) -> SelectorResult<Selection>
    where
        S: AccountSource + ?Sized,
    {
        let candidates = match source.list_accounts(account_type).await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::warn!("Failed to list accounts of type {}: {}", account_type, e);
                Vec::new()
            }
        };
        self.select(&candidates, hint).await
    }

    /// Forgets the remembered account.
    pub async fn reset(&self) {
        *self.last_chosen.lock().await = None;
    }

    /// Returns the remembered account, if any.
    pub async fn last_chosen(&self) -> Option<Account> {
        self.last_chosen.lock().await.clone()
    }
}
