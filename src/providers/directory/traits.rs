//! Account and contact source traits.
//!
//! This module defines the [`AccountSource`] and [`ContactSource`] traits that
//! abstract over wherever accounts and contacts actually live (a device
//! registry, an address book, a test fixture). Sources only fetch; every
//! decision about the fetched data is made by the services layer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, Contact, ContactId, EmailRecord, PhotoRef};

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while reading from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing store could not be reached.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// Requested contact was not found.
    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Lists the accounts registered on the device.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Returns every account of the given type.
    ///
    /// An empty list means no account of that type exists.
    async fn list_accounts(&self, account_type: &str) -> Result<Vec<Account>>;
}

/// Reads contacts and their raw email records.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Returns all contacts, visible or not.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the raw email records for a contact.
    ///
    /// Records are returned as stored; they may be malformed or duplicated.
    async fn list_emails(&self, contact_id: &ContactId) -> Result<Vec<EmailRecord>>;

    /// Returns the contact's photo reference, or `None` if it has no photo.
    async fn photo_ref(&self, contact_id: &ContactId) -> Result<Option<PhotoRef>>;
}

#[async_trait]
impl<T: AccountSource + ?Sized> AccountSource for Arc<T> {
    async fn list_accounts(&self, account_type: &str) -> Result<Vec<Account>> {
        (**self).list_accounts(account_type).await
    }
}

#[async_trait]
impl<T: ContactSource + ?Sized> ContactSource for Arc<T> {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        (**self).list_contacts().await
    }

    async fn list_emails(&self, contact_id: &ContactId) -> Result<Vec<EmailRecord>> {
        (**self).list_emails(contact_id).await
    }

    async fn photo_ref(&self, contact_id: &ContactId) -> Result<Option<PhotoRef>> {
        (**self).photo_ref(contact_id).await
    }
}
