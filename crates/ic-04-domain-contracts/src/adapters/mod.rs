//! # Adapters
//!
//! Collaborator implementations shipped with the crate.

pub mod recording;

pub use recording::{CollaboratorCall, RecordingCollaborators, INJECTED_FAILURE};
