//! Breadcrumb and pick-list entries.

use favorites_core::types::FolderId;
use serde::{Deserialize, Serialize};

/// The `{id, name}` pair of a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSegment {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
}

impl FolderSegment {
    /// Creates a segment from a raw id.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: FolderId(id),
            name: name.into(),
        }
    }
}

/// Segments from the root to a target folder, both inclusive.
pub type FolderPath = Vec<FolderSegment>;
