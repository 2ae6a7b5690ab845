//! Business services layer.
//!
//! This module contains the decision logic of the scheduler, kept free of any
//! platform I/O so it can be tested against plain in-memory data.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (Scheduler, CLI)
//!          |
//!          v
//!    Services Layer  <-- You are here
//!          |
//!          v
//! Providers (account/contact sources, prompts)
//! ```
//!
//! # Services Overview
//!
//! - [`AccountSelector`]: picks the account to act as, asking the user only when ambiguous
//! - [`EmailResolver`]: picks the address that represents a contact
//! - [`AttendeeService`]: builds the list of possible meeting attendees

mod account_selector;
mod attendee_service;
mod email_resolver;

pub use account_selector::{
    AccountSelector, Selection, SelectorError, SelectorResult, CHOOSE_ACCOUNT_TITLE,
};
pub use attendee_service::{AttendeeError, AttendeeResult, AttendeeRetriever, AttendeeService};
pub use email_resolver::{
    build_attendee, current_user_attendee, resolve_email, EmailResolver, GMAIL_DOMAIN,
};
