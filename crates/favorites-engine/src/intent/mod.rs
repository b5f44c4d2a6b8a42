//! Mutation intents: validated, not-yet-sent folder requests.
//!
//! Builders are synchronous and side-effect free. They exist so a doomed
//! request never reaches the server.

pub mod builder;
pub mod error;

pub use builder::FolderIntentBuilder;
pub use error::{ValidationError, ValidationReason};
