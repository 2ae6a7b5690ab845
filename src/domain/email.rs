//! Email record and address helpers.
//!
//! Records come straight from the contact source and are not validated on the
//! way in: a record may be a duplicate, may lack an "@", or may be one of
//! several flagged as primary.

use serde::{Deserialize, Serialize};

/// One raw email entry belonging to a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Raw address string as stored by the contact source.
    pub address: String,
    /// Whether the source flagged this entry as the contact's primary address.
    #[serde(default)]
    pub is_primary: bool,
}

impl EmailRecord {
    /// Creates a non-primary record.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            is_primary: false,
        }
    }

    /// Creates a primary-flagged record.
    pub fn primary(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            is_primary: true,
        }
    }

    /// Returns true if the raw string looks like an address at all.
    pub fn is_well_formed(&self) -> bool {
        self.address.contains('@')
    }

    /// Returns the domain part of the address, "@" included.
    pub fn domain(&self) -> Option<&str> {
        domain_of(&self.address)
    }
}

/// Returns the substring of `address` from the first "@" onward.
///
/// Returns `None` when there is no "@".
pub fn domain_of(address: &str) -> Option<&str> {
    address.find('@').map(|at| &address[at..])
}

/// Case-insensitive comparison of two domains.
pub fn domains_match(lhs: &str, rhs: &str) -> bool {
    lhs.chars()
        .flat_map(char::to_lowercase)
        .eq(rhs.chars().flat_map(char::to_lowercase))
}
