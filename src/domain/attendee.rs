//! Attendee value type.

use serde::{Deserialize, Serialize};

use super::PhotoRef;

/// A person proposed as a meeting participant.
///
/// Attendees are immutable once built; [`Attendee::into_selected`] produces a
/// new value rather than flipping the flag in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    display_label: String,
    email: String,
    photo_ref: Option<PhotoRef>,
    selected: bool,
}

impl Attendee {
    /// Creates an unselected attendee.
    pub fn new(
        display_label: impl Into<String>,
        email: impl Into<String>,
        photo_ref: Option<PhotoRef>,
    ) -> Self {
        Self {
            display_label: display_label.into(),
            email: email.into(),
            photo_ref,
            selected: false,
        }
    }

    /// Returns this attendee marked as selected.
    pub fn into_selected(self) -> Self {
        Self {
            selected: true,
            ..self
        }
    }

    /// Label shown in the attendee list, typically "Name (email)".
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// Resolved email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Photo reference, if the contact has one.
    pub fn photo_ref(&self) -> Option<&PhotoRef> {
        self.photo_ref.as_ref()
    }

    /// Whether the attendee is preselected in the attendee list.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_attendee_is_not_selected() {
        let attendee = Attendee::new("Alice (a@corp.com)", "a@corp.com", None);
        assert_eq!(attendee.display_label(), "Alice (a@corp.com)");
        assert_eq!(attendee.email(), "a@corp.com");
        assert!(attendee.photo_ref().is_none());
        assert!(!attendee.is_selected());
    }

    #[test]
    fn into_selected_keeps_other_fields() {
        let photo = PhotoRef::from("content://contacts/1/photo");
        let attendee =
            Attendee::new("Alice (a@corp.com)", "a@corp.com", Some(photo.clone())).into_selected();
        assert!(attendee.is_selected());
        assert_eq!(attendee.photo_ref(), Some(&photo));
        assert_eq!(attendee.email(), "a@corp.com");
    }
}
