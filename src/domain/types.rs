//! Core identifier types for domain entities.
//!
//! These newtype wrappers keep contact identifiers and photo references
//! from being mixed up with plain strings such as email addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a contact in the contact source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Opaque reference to a contact photo (for example a content URI).
///
/// The core never dereferences it; it is handed through to whoever renders
/// the attendee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(pub String);

impl PhotoRef {
    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PhotoRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PhotoRef {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_display() {
        let id = ContactId("contact-7".to_string());
        assert_eq!(id.to_string(), "contact-7");
    }

    #[test]
    fn contact_id_equality() {
        let id1 = ContactId::from("contact-1");
        let id2 = ContactId::from("contact-1".to_string());
        assert_eq!(id1, id2);
    }

    #[test]
    fn contact_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ContactId::from("contact-1"));
        assert!(set.contains(&ContactId::from("contact-1")));
    }

    #[test]
    fn photo_ref_is_transparent_in_json() {
        let photo = PhotoRef::from("content://contacts/42/photo");
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, "\"content://contacts/42/photo\"");
        assert_eq!(photo.as_str(), "content://contacts/42/photo");
    }
}
