//! Scheduler front door.
//!
//! Wires the account selector, the directory and the attendee service
//! together for one meeting-scheduling session.

use std::sync::Arc;

use thiserror::Error;

use crate::config::Settings;
use crate::domain::{Account, Attendee};
use crate::providers::directory::{AccountSource, ContactSource};
use crate::providers::prompt::{ChoicePrompt, PromptError};
use crate::services::{
    AccountSelector, AttendeeError, AttendeeRetriever, AttendeeService, EmailResolver, Selection,
    SelectorError,
};

/// Title of the alert shown when no account can be used.
pub const NO_ACCOUNT_TITLE: &str = "No account found";

/// Errors surfaced to the user of the scheduler.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The device has no account of the configured type.
    #[error("no account of type {0} found")]
    NoAccountFound(String),

    /// The user was asked to pick an account and declined.
    #[error("no account selected")]
    NoAccountSelected,

    /// Account selection failed.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// Attendees could not be listed.
    #[error(transparent)]
    Attendees(#[from] AttendeeError),

    /// The alert could not be shown.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// One scheduling session over a directory.
pub struct Scheduler<P, D>
where
    P: ChoicePrompt,
    D: AccountSource + ContactSource,
{
    selector: Arc<AccountSelector<P>>,
    directory: Arc<D>,
    account_type: String,
    account_hint: Option<String>,
    resolver: EmailResolver,
    include_hidden_contacts: bool,
}

impl<P, D> Scheduler<P, D>
where
    P: ChoicePrompt,
    D: AccountSource + ContactSource,
{
    /// Creates a scheduler configured from `settings`.
    pub fn new(selector: Arc<AccountSelector<P>>, directory: Arc<D>, settings: &Settings) -> Self {
        Self {
            selector,
            directory,
            account_type: settings.accounts.account_type.clone(),
            account_hint: settings.accounts.last_account.clone(),
            resolver: EmailResolver::new(settings.attendees.fallback_domain.clone()),
            include_hidden_contacts: settings.attendees.include_hidden_contacts,
        }
    }

    /// Returns the shared selector.
    pub fn selector(&self) -> &Arc<AccountSelector<P>> {
        &self.selector
    }

    /// Returns the account to act as, asking the user if several exist.
    pub async fn active_account(&self) -> SchedulerResult<Account> {
        let selection = self
            .selector
            .choose_account(
                self.directory.as_ref(),
                &self.account_type,
                self.account_hint.as_deref(),
            )
            .await?;

        match selection {
            Selection::Resolved(account) => {
                tracing::info!(account = %account.name, "Active account");
                Ok(account)
            }
            Selection::NoneFound => {
                self.selector
                    .prompt()
                    .alert(NO_ACCOUNT_TITLE, "No account found")
                    .await?;
                Err(SchedulerError::NoAccountFound(self.account_type.clone()))
            }
            Selection::Declined => Err(SchedulerError::NoAccountSelected),
        }
    }

    /// Lists the attendees that `account` can invite.
    pub async fn possible_attendees(&self, account: &Account) -> SchedulerResult<Vec<Attendee>> {
        let service = AttendeeService::new(Arc::clone(&self.directory), account.clone())
            .with_resolver(self.resolver.clone())
            .include_hidden_contacts(self.include_hidden_contacts);
        Ok(service.possible_attendees().await?)
    }

    /// Forgets the account chosen during this session.
    pub async fn reset_selection(&self) {
        self.selector.reset().await;
    }
}
