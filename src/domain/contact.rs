//! Contact domain types.
//!
//! Represents people from the contact source who may be proposed as meeting
//! attendees.

use serde::{Deserialize, Serialize};

use super::ContactId;

/// A contact from the contact source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for this contact.
    pub id: ContactId,
    /// Name shown to the user.
    pub display_name: String,
    /// Whether the contact belongs to a group the user has chosen to display.
    #[serde(default = "visible_by_default")]
    pub in_visible_group: bool,
}

impl Contact {
    /// Creates a new visible contact.
    pub fn new(id: impl Into<ContactId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            in_visible_group: true,
        }
    }

    /// Marks the contact as hidden from the visible groups.
    pub fn hidden(mut self) -> Self {
        self.in_visible_group = false;
        self
    }
}

fn visible_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_new_is_visible() {
        let contact = Contact::new("c1", "Alice Smith");
        assert_eq!(contact.id, ContactId::from("c1"));
        assert_eq!(contact.display_name, "Alice Smith");
        assert!(contact.in_visible_group);
    }

    #[test]
    fn contact_hidden() {
        let contact = Contact::new("c1", "Alice Smith").hidden();
        assert!(!contact.in_visible_group);
    }

    #[test]
    fn contact_visibility_defaults_to_visible() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":"c9","display_name":"Bob"}"#).unwrap();
        assert!(contact.in_visible_group);
    }
}
