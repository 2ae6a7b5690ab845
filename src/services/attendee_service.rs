//! Attendee service for proposing meeting participants.
//!
//! Turns the contacts of a [`ContactSource`] into [`Attendee`]s for the
//! acting account:
//! - Only contacts in a visible group are considered
//! - Each contact's address is chosen by the [`EmailResolver`]
//! - Contacts without any valid address are left out
//! - The acting account itself is appended, preselected

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Account, Attendee, Contact};
use crate::providers::directory::{ContactSource, SourceError};

use super::email_resolver::{build_attendee, current_user_attendee, EmailResolver};

/// Errors that can occur while listing attendees.
#[derive(Debug, Error)]
pub enum AttendeeError {
    /// The contact list could not be read.
    #[error("contact source error: {0}")]
    Source(#[from] SourceError),
}

/// Result type for attendee operations.
pub type AttendeeResult<T> = Result<T, AttendeeError>;

/// Produces the attendees that can be invited to a meeting.
#[async_trait]
pub trait AttendeeRetriever: Send + Sync {
    /// Returns every possible attendee, the current user last and selected.
    async fn possible_attendees(&self) -> AttendeeResult<Vec<Attendee>>;

    /// Returns the attendee representing the acting account.
    fn current_user(&self) -> Attendee;
}

/// Service that builds attendees from a contact source.
pub struct AttendeeService<C: ContactSource> {
    contacts: C,
    account: Account,
    resolver: EmailResolver,
    include_hidden_contacts: bool,
}

impl<C: ContactSource> AttendeeService<C> {
    /// Creates a new attendee service acting as `account`.
    pub fn new(contacts: C, account: Account) -> Self {
        Self {
            contacts,
            account,
            resolver: EmailResolver::default(),
            include_hidden_contacts: false,
        }
    }

    /// Sets the email resolver.
    pub fn with_resolver(mut self, resolver: EmailResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Also proposes contacts outside the visible groups.
    pub fn include_hidden_contacts(mut self, include: bool) -> Self {
        self.include_hidden_contacts = include;
        self
    }

    /// Returns the acting account.
    pub fn account(&self) -> &Account {
        &self.account
    }

    async fn attendee_for(&self, contact: &Contact) -> Option<Attendee> {
        let records = match self.contacts.list_emails(&contact.id).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to list emails for contact {}: {}", contact.id, e);
                return None;
            }
        };

        let Some(email) = self.resolver.resolve(&records, &self.account.name) else {
            tracing::debug!(contact_id = %contact.id, "No valid email for contact");
            return None;
        };

        let photo_ref = self
            .contacts
            .photo_ref(&contact.id)
            .await
            .unwrap_or_else(|e| {
                tracing::debug!("No photo for contact {}: {}", contact.id, e);
                None
            });

        Some(build_attendee(&contact.display_name, email, photo_ref))
    }
}

#[async_trait]
impl<C: ContactSource> AttendeeRetriever for AttendeeService<C> {
    async fn possible_attendees(&self) -> AttendeeResult<Vec<Attendee>> {
        let contacts = self.contacts.list_contacts().await?;
        if contacts.is_empty() {
            tracing::warn!("No contacts found");
        }

        let mut attendees = Vec::new();
        for contact in contacts
            .iter()
            .filter(|c| self.include_hidden_contacts || c.in_visible_group)
        {
            if let Some(attendee) = self.attendee_for(contact).await {
                attendees.push(attendee);
            }
        }

        tracing::info!(
            account = %self.account.name,
            attendees = attendees.len(),
            "Listed possible attendees"
        );

        attendees.push(self.current_user());
        Ok(attendees)
    }

    fn current_user(&self) -> Attendee {
        current_user_attendee(&self.account.name)
    }
}
