//! Validation failures raised before any request is sent.

use std::fmt;

use favorites_core::error::{AppError, ErrorKind};
use favorites_core::types::FolderId;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable reason code for a rejected mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    /// The trimmed folder name is empty.
    EmptyName,
    /// A referenced folder is not in the snapshot.
    NotFound,
    /// The favorites root cannot be renamed, moved, or deleted.
    RootImmutable,
    /// The move target is the folder itself or one of its descendants.
    CyclicMove,
}

impl ValidationReason {
    /// The wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::NotFound => "NOT_FOUND",
            Self::RootImmutable => "ROOT_IMMUTABLE",
            Self::CyclicMove => "CYCLIC_MOVE",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A mutation that would be rejected by the server, caught locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The trimmed folder name is empty.
    #[error("Folder name cannot be empty")]
    EmptyName,
    /// A referenced folder is not in the snapshot.
    #[error("Folder {0} not found")]
    NotFound(FolderId),
    /// The favorites root cannot be renamed, moved, or deleted.
    #[error("The favorites root folder cannot be modified")]
    RootImmutable,
    /// The move target is inside the moved folder's subtree.
    #[error("Cannot move folder {folder} into itself or its descendant {target}")]
    CyclicMove {
        /// The folder being moved.
        folder: FolderId,
        /// The rejected new parent.
        target: FolderId,
    },
}

impl ValidationError {
    /// The machine-readable reason.
    pub fn reason(&self) -> ValidationReason {
        match self {
            Self::EmptyName => ValidationReason::EmptyName,
            Self::NotFound(_) => ValidationReason::NotFound,
            Self::RootImmutable => ValidationReason::RootImmutable,
            Self::CyclicMove { .. } => ValidationReason::CyclicMove,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let kind = match err {
            ValidationError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Validation,
        };
        let message = format!("{}: {err}", err.reason());
        AppError::with_source(kind, message, err)
    }
}
