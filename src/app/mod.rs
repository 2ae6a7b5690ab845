//! Application layer.
//!
//! Holds the [`Scheduler`], which the binary drives for one session.

mod scheduler;

pub use scheduler::{Scheduler, SchedulerError, SchedulerResult, NO_ACCOUNT_TITLE};
