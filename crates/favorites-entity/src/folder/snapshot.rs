//! One complete favorites tree as returned by the persistence API.

use favorites_core::error::AppError;
use favorites_core::types::{Exam, FolderId, ROOT_FOLDER_ID};
use serde::{Deserialize, Serialize};

use super::model::FolderNode;

/// An immutable favorites tree for one (user, exam) pair.
///
/// A snapshot is replaced wholesale on every refetch and never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSnapshot {
    /// The exam this tree belongs to.
    pub exam: Exam,
    /// The top-level folder.
    pub root: FolderNode,
}

impl FolderSnapshot {
    /// Wraps an already deserialized tree.
    pub fn new(exam: Exam, root: FolderNode) -> Self {
        Self { exam, root }
    }

    /// Deserializes the server's root folder document.
    ///
    /// Only the JSON shape is checked here; tree invariants are checked by
    /// the engine.
    pub fn from_json(exam: Exam, json: &str) -> Result<Self, AppError> {
        let root: FolderNode = serde_json::from_str(json)?;
        Ok(Self::new(exam, root))
    }

    /// The id of the top-level folder.
    pub fn root_id(&self) -> FolderId {
        self.root.id
    }

    /// Whether the id names the top-level folder: this snapshot's root or
    /// the reserved [`ROOT_FOLDER_ID`], even when a malformed tree puts the
    /// reserved id elsewhere.
    pub fn is_root(&self, folder_id: FolderId) -> bool {
        self.root.id == folder_id || folder_id == ROOT_FOLDER_ID
    }
}
