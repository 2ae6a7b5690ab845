//! Account and contact sources.
//!
//! This module contains the [`AccountSource`] and [`ContactSource`] traits and
//! the [`StaticDirectory`] implementation, which serves both from an
//! in-memory snapshot loaded from JSON.

mod static_directory;
mod traits;

pub use static_directory::{DirectoryEntry, DirectoryError, DirectorySnapshot, StaticDirectory};
pub use traits::{AccountSource, ContactSource, Result, SourceError};
