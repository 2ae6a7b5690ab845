//! Adapters for the collaborators around the decision logic.
//!
//! - [`directory`] - account and contact sources
//! - [`prompt`] - asking the user to pick among options

pub mod directory;
pub mod prompt;
