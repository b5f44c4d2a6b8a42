//! Mutation request payloads.
//!
//! These are produced by the engine after local validation and sent as-is;
//! the engine itself never sends them.

use favorites_core::types::{Exam, FolderId, ItemId};
use serde::{Deserialize, Serialize};

/// Create a folder under an existing parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Exam scope.
    pub exam: Exam,
    /// Trimmed folder name.
    pub name: String,
    /// Parent folder.
    pub parent_id: FolderId,
}

/// Rename and/or move a folder. The API has a single update endpoint, so
/// both name and parent are always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    /// Exam scope.
    pub exam: Exam,
    /// The folder being updated.
    pub id: FolderId,
    /// Name after the update.
    pub name: String,
    /// Parent after the update.
    pub parent_id: FolderId,
}

/// Delete a folder. Subfolders and item associations cascade server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFolderRequest {
    /// Exam scope.
    pub exam: Exam,
    /// The folder being deleted.
    pub folder_id: FolderId,
    /// Parent of the deleted folder; the view navigates here afterwards.
    pub parent_id: FolderId,
}

/// Replace the set of folders holding an item.
///
/// `favorite_folder_ids` is the full desired set; the added/removed lists
/// are the difference against the snapshot the request was planned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFavoriteFoldersRequest {
    /// Exam scope.
    pub exam: Exam,
    /// The favorited item.
    pub assignment_id: ItemId,
    /// Every folder that should hold the item afterwards, ascending.
    pub favorite_folder_ids: Vec<FolderId>,
    /// Folders gaining the item, ascending.
    pub added_folder_ids: Vec<FolderId>,
    /// Folders losing the item, ascending.
    pub removed_folder_ids: Vec<FolderId>,
}

impl SetFavoriteFoldersRequest {
    /// Whether the item stops being a favorite altogether.
    pub fn is_unfavorite(&self) -> bool {
        self.favorite_folder_ids.is_empty()
    }
}

/// Any request the engine can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FavoriteMutation {
    /// Folder creation.
    CreateFolder(CreateFolderRequest),
    /// Folder rename or move.
    UpdateFolder(UpdateFolderRequest),
    /// Folder deletion.
    DeleteFolder(DeleteFolderRequest),
    /// Item-folder association change.
    SetFavoriteFolders(SetFavoriteFoldersRequest),
}

impl From<CreateFolderRequest> for FavoriteMutation {
    fn from(req: CreateFolderRequest) -> Self {
        Self::CreateFolder(req)
    }
}

impl From<UpdateFolderRequest> for FavoriteMutation {
    fn from(req: UpdateFolderRequest) -> Self {
        Self::UpdateFolder(req)
    }
}

impl From<DeleteFolderRequest> for FavoriteMutation {
    fn from(req: DeleteFolderRequest) -> Self {
        Self::DeleteFolder(req)
    }
}

impl From<SetFavoriteFoldersRequest> for FavoriteMutation {
    fn from(req: SetFavoriteFoldersRequest) -> Self {
        Self::SetFavoriteFolders(req)
    }
}
