//! Core type definitions used across the favorites workspace.

pub mod exam;
pub mod id;

pub use exam::Exam;
pub use id::*;
