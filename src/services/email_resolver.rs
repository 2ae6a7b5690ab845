//! Attendee email resolution.
//!
//! Picks the one address that should represent a contact on a meeting
//! invitation, out of whatever records the contact source holds for it.
//!
//! # Rules
//!
//! Records without an "@" are ignored. The rest are scanned primary-first
//! (input order among equals), and the first rule that applies wins:
//!
//! 1. The first record in the acting account's own domain, returned as soon
//!    as it is seen.
//! 2. Otherwise, the first record in the fallback domain (`@gmail.com`).
//! 3. Otherwise, the first well-formed record in input order.
//!
//! Rule 3 uses input order, not the primary-first order of the scan.

use crate::domain::{domain_of, domains_match, Attendee, EmailRecord, PhotoRef};

/// Fallback domain used when no record shares the account's domain.
pub const GMAIL_DOMAIN: &str = "@gmail.com";

/// Resolves the representative email of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailResolver {
    fallback_domain: String,
}

impl Default for EmailResolver {
    fn default() -> Self {
        Self::new(GMAIL_DOMAIN)
    }
}

impl EmailResolver {
    /// Creates a resolver with a custom fallback domain.
    ///
    /// A domain given without a leading "@" has one added.
    pub fn new(fallback_domain: impl Into<String>) -> Self {
        let fallback_domain = fallback_domain.into();
        let fallback_domain = if fallback_domain.starts_with('@') {
            fallback_domain
        } else {
            format!("@{}", fallback_domain)
        };
        Self { fallback_domain }
    }

    /// Returns the fallback domain, "@" included.
    pub fn fallback_domain(&self) -> &str {
        &self.fallback_domain
    }

    /// Returns the best address among `records` for an account named
    /// `self_account_name`, or `None` if no record is a valid address.
    pub fn resolve<'a>(
        &self,
        records: &'a [EmailRecord],
        self_account_name: &str,
    ) -> Option<&'a str> {
        let valid: Vec<&EmailRecord> = records.iter().filter(|r| r.is_well_formed()).collect();
        let first_valid = *valid.first()?;

        let mut scan_order = valid.clone();
        // Stable sort: primaries first, input order kept among equals.
        scan_order.sort_by_key(|record| !record.is_primary);

        let self_domain = domain_of(self_account_name);
        let mut fallback = None;

        for record in scan_order {
            let Some(domain) = record.domain() else {
                continue;
            };
            if self_domain.is_some_and(|own| domains_match(own, domain)) {
                return Some(record.address.as_str());
            }
            if fallback.is_none() && domains_match(&self.fallback_domain, domain) {
                fallback = Some(record.address.as_str());
            }
        }

        Some(fallback.unwrap_or(first_valid.address.as_str()))
    }
}

/// Resolves with the default `@gmail.com` fallback.
pub fn resolve_email<'a>(records: &'a [EmailRecord], self_account_name: &str) -> Option<&'a str> {
    EmailResolver::default().resolve(records, self_account_name)
}

/// Builds the attendee representing the acting account itself.
///
/// It is always preselected and has no photo.
pub fn current_user_attendee(self_account_name: &str) -> Attendee {
    Attendee::new(
        format!("Me ({})", self_account_name),
        self_account_name,
        None,
    )
    .into_selected()
}

/// Builds an unselected attendee labelled "Name (email)".
pub fn build_attendee(display_name: &str, email: &str, photo_ref: Option<PhotoRef>) -> Attendee {
    Attendee::new(format!("{} ({})", display_name, email), email, photo_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ME: &str = "me@corp.com";

    #[test]
    fn same_domain_wins_over_gmail() {
        let records = vec![
            EmailRecord::new("a@corp.com"),
            EmailRecord::new("b@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("a@corp.com"));
    }

    #[test]
    fn same_domain_wins_even_when_listed_last() {
        let records = vec![
            EmailRecord::new("b@gmail.com"),
            EmailRecord::new("d@yahoo.com"),
            EmailRecord::new("a@corp.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("a@corp.com"));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let records = vec![
            EmailRecord::new("bad-string"),
            EmailRecord::new("c@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("c@gmail.com"));
    }

    #[test]
    fn first_record_fallback() {
        let records = vec![EmailRecord::new("d@yahoo.com")];
        assert_eq!(resolve_email(&records, ME), Some("d@yahoo.com"));
    }

    #[test]
    fn empty_records_resolve_to_none() {
        assert_eq!(resolve_email(&[], ME), None);
    }

    #[test]
    fn all_malformed_resolve_to_none() {
        let records = vec![EmailRecord::new("nope"), EmailRecord::primary("")];
        assert_eq!(resolve_email(&records, ME), None);
    }

    #[test]
    fn domain_match_ignores_case() {
        let records = vec![
            EmailRecord::new("x@GMAIL.com"),
            EmailRecord::new("a@Corp.Com"),
        ];
        assert_eq!(resolve_email(&records, "ME@CORP.COM"), Some("a@Corp.Com"));

        let records = vec![EmailRecord::new("d@yahoo.com"), EmailRecord::new("x@GMAIL.com")];
        assert_eq!(resolve_email(&records, ME), Some("x@GMAIL.com"));
    }

    #[test]
    fn primary_records_are_scanned_first() {
        let records = vec![
            EmailRecord::new("first@corp.com"),
            EmailRecord::primary("primary@corp.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("primary@corp.com"));

        let records = vec![
            EmailRecord::new("first@gmail.com"),
            EmailRecord::primary("primary@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("primary@gmail.com"));
    }

    #[test]
    fn first_record_fallback_uses_input_order_not_primary_order() {
        let records = vec![
            EmailRecord::new("first@yahoo.com"),
            EmailRecord::primary("primary@hotmail.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("first@yahoo.com"));
    }

    #[test]
    fn first_record_fallback_skips_leading_malformed() {
        let records = vec![
            EmailRecord::primary("broken"),
            EmailRecord::new("d@yahoo.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("d@yahoo.com"));
    }

    #[test]
    fn several_primaries_keep_input_order() {
        let records = vec![
            EmailRecord::primary("one@gmail.com"),
            EmailRecord::primary("two@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("one@gmail.com"));
    }

    #[test]
    fn self_name_without_at_never_matches_domain() {
        let records = vec![
            EmailRecord::new("a@corp.com"),
            EmailRecord::new("b@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, "corp.com"), Some("b@gmail.com"));
        assert_eq!(resolve_email(&records, ""), Some("b@gmail.com"));
    }

    #[test]
    fn gmail_account_prefers_gmail_records() {
        let records = vec![
            EmailRecord::new("a@corp.com"),
            EmailRecord::new("b@gmail.com"),
        ];
        assert_eq!(resolve_email(&records, "me@gmail.com"), Some("b@gmail.com"));
    }

    #[test]
    fn duplicates_are_tolerated() {
        let records = vec![
            EmailRecord::new("d@yahoo.com"),
            EmailRecord::new("d@yahoo.com"),
        ];
        assert_eq!(resolve_email(&records, ME), Some("d@yahoo.com"));
    }

    #[test]
    fn custom_fallback_domain() {
        let resolver = EmailResolver::new("outlook.com");
        assert_eq!(resolver.fallback_domain(), "@outlook.com");

        let records = vec![
            EmailRecord::new("b@gmail.com"),
            EmailRecord::new("c@outlook.com"),
        ];
        assert_eq!(resolver.resolve(&records, ME), Some("c@outlook.com"));
    }

    #[test]
    fn current_user_attendee_is_selected() {
        let me = current_user_attendee(ME);
        assert_eq!(me.display_label(), "Me (me@corp.com)");
        assert_eq!(me.email(), ME);
        assert!(me.photo_ref().is_none());
        assert!(me.is_selected());
    }

    #[test]
    fn build_attendee_labels_with_email() {
        let photo = PhotoRef::from("content://contacts/1/photo");
        let attendee = build_attendee("Alice Smith", "alice@corp.com", Some(photo.clone()));
        assert_eq!(attendee.display_label(), "Alice Smith (alice@corp.com)");
        assert_eq!(attendee.email(), "alice@corp.com");
        assert_eq!(attendee.photo_ref(), Some(&photo));
        assert!(!attendee.is_selected());
    }
}
