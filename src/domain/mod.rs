//! Domain layer types for the meeting scheduler.
//!
//! This module contains the value types the decision logic works on:
//! accounts, contacts, raw email records and the attendees built from them.

mod account;
mod attendee;
mod contact;
mod email;
mod types;

pub use account::{Account, DEFAULT_ACCOUNT_TYPE};
pub use attendee::Attendee;
pub use contact::Contact;
pub use email::{domain_of, domains_match, EmailRecord};
pub use types::{ContactId, PhotoRef};
