//! In-memory account and contact directory.
//!
//! A [`StaticDirectory`] holds a snapshot of accounts and contacts, typically
//! loaded from a JSON file:
//!
//! ```json
//! {
//!   "accounts": [{ "name": "me@corp.com", "type": "com.google" }],
//!   "contacts": [
//!     {
//!       "id": "c1",
//!       "display_name": "Alice Smith",
//!       "emails": [{ "address": "alice@corp.com", "is_primary": true }],
//!       "photo": "content://contacts/c1/photo"
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::traits::{AccountSource, ContactSource, Result, SourceError};
use crate::domain::{Account, Contact, ContactId, EmailRecord, PhotoRef};

/// Errors that can occur while loading a directory snapshot.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse directory file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate contact id: {0}")]
    DuplicateContact(ContactId),
}

/// A contact together with its raw email records and photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// The contact itself.
    #[serde(flatten)]
    pub contact: Contact,
    /// Raw email records, in source order.
    #[serde(default)]
    pub emails: Vec<EmailRecord>,
    /// Photo reference, if any.
    #[serde(default)]
    pub photo: Option<PhotoRef>,
}

impl DirectoryEntry {
    /// Creates an entry with no emails and no photo.
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            emails: Vec::new(),
            photo: None,
        }
    }

    /// Appends an email record.
    pub fn email(mut self, record: EmailRecord) -> Self {
        self.emails.push(record);
        self
    }

    /// Sets the photo reference.
    pub fn photo(mut self, photo: impl Into<PhotoRef>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Serialized form of a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    /// Registered accounts of every type.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Contacts with their records.
    #[serde(default)]
    pub contacts: Vec<DirectoryEntry>,
}

/// Account and contact source backed by an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    snapshot: DirectorySnapshot,
}

impl StaticDirectory {
    /// Creates a directory from a snapshot.
    ///
    /// Fails if two entries share a contact id.
    pub fn new(snapshot: DirectorySnapshot) -> std::result::Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for entry in &snapshot.contacts {
            if !seen.insert(&entry.contact.id) {
                return Err(DirectoryError::DuplicateContact(entry.contact.id.clone()));
            }
        }
        Ok(Self { snapshot })
    }

    /// Parses a directory from a JSON document.
    pub fn from_json(json: &str) -> std::result::Result<Self, DirectoryError> {
        let snapshot: DirectorySnapshot = serde_json::from_str(json)?;
        Self::new(snapshot)
    }

    /// Loads a directory from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> std::result::Result<Self, DirectoryError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let directory = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            accounts = directory.snapshot.accounts.len(),
            contacts = directory.snapshot.contacts.len(),
            "Loaded directory snapshot"
        );
        Ok(directory)
    }

    /// Returns the underlying snapshot.
    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    fn entry(&self, contact_id: &ContactId) -> Result<&DirectoryEntry> {
        self.snapshot
            .contacts
            .iter()
            .find(|entry| &entry.contact.id == contact_id)
            .ok_or_else(|| SourceError::ContactNotFound(contact_id.clone()))
    }
}

#[async_trait]
impl AccountSource for StaticDirectory {
    async fn list_accounts(&self, account_type: &str) -> Result<Vec<Account>> {
        Ok(self
            .snapshot
            .accounts
            .iter()
            .filter(|account| account.is_type(account_type))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContactSource for StaticDirectory {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self
            .snapshot
            .contacts
            .iter()
            .map(|entry| entry.contact.clone())
            .collect())
    }

    async fn list_emails(&self, contact_id: &ContactId) -> Result<Vec<EmailRecord>> {
        Ok(self.entry(contact_id)?.emails.clone())
    }

    async fn photo_ref(&self, contact_id: &ContactId) -> Result<Option<PhotoRef>> {
        Ok(self.entry(contact_id)?.photo.clone())
    }
}
