//! meeting-scheduler - Account selection and attendee resolution for meetings
//!
//! This crate provides the core of a meeting scheduler: choosing which account
//! to act as, and turning the address book into a list of attendees with one
//! representative email each.

pub mod app;
pub mod config;
pub mod domain;
pub mod providers;
pub mod services;

pub use app::Scheduler;
