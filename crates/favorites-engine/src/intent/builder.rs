//! Folder create/rename/move/delete request builders.

use favorites_core::types::FolderId;
use favorites_entity::favorite::{CreateFolderRequest, DeleteFolderRequest, UpdateFolderRequest};
use favorites_entity::folder::{FolderNode, FolderSnapshot};
use tracing::debug;

use super::error::ValidationError;
use crate::query::{find_node, find_parent_id};
use crate::walk::Preorder;

/// Validates folder actions against one snapshot and builds the requests.
///
/// Checks run in a fixed order: root protection, existence, then name or
/// cycle checks.
#[derive(Debug, Clone, Copy)]
pub struct FolderIntentBuilder<'a> {
    snapshot: &'a FolderSnapshot,
}

impl<'a> FolderIntentBuilder<'a> {
    /// Creates a builder over a snapshot.
    pub fn new(snapshot: &'a FolderSnapshot) -> Self {
        Self { snapshot }
    }

    /// Builds a request to create `name` under `parent_id`.
    pub fn create_folder(
        &self,
        parent_id: FolderId,
        name: &str,
    ) -> Result<CreateFolderRequest, ValidationError> {
        let parent = self.require_folder(parent_id)?;
        let name = require_name(name)?;

        Ok(CreateFolderRequest {
            exam: self.snapshot.exam,
            name,
            parent_id: parent.id,
        })
    }

    /// Builds a request to rename a non-root folder.
    pub fn rename_folder(
        &self,
        folder_id: FolderId,
        new_name: &str,
    ) -> Result<UpdateFolderRequest, ValidationError> {
        let folder = self.require_mutable(folder_id)?;
        let name = require_name(new_name)?;
        let parent_id = self.require_parent(folder_id)?;

        Ok(UpdateFolderRequest {
            exam: self.snapshot.exam,
            id: folder.id,
            name,
            parent_id,
        })
    }

    /// Builds a request to move a non-root folder under `new_parent_id`.
    ///
    /// The new parent must exist and must not be the folder itself or any
    /// of its descendants.
    pub fn move_folder(
        &self,
        folder_id: FolderId,
        new_parent_id: FolderId,
    ) -> Result<UpdateFolderRequest, ValidationError> {
        let folder = self.require_mutable(folder_id)?;
        self.require_folder(new_parent_id)?;

        if Preorder::new(folder).any(|visit| visit.node.id == new_parent_id) {
            debug!(
                folder_id = %folder_id,
                target = %new_parent_id,
                "Folder move rejected: target inside moved subtree"
            );
            return Err(ValidationError::CyclicMove {
                folder: folder_id,
                target: new_parent_id,
            });
        }

        Ok(UpdateFolderRequest {
            exam: self.snapshot.exam,
            id: folder.id,
            name: folder.name.clone(),
            parent_id: new_parent_id,
        })
    }

    /// Builds a request to delete a non-root folder.
    pub fn delete_folder(&self, folder_id: FolderId) -> Result<DeleteFolderRequest, ValidationError> {
        let folder = self.require_mutable(folder_id)?;
        let parent_id = self.require_parent(folder_id)?;

        Ok(DeleteFolderRequest {
            exam: self.snapshot.exam,
            folder_id: folder.id,
            parent_id,
        })
    }

    fn require_folder(&self, folder_id: FolderId) -> Result<&'a FolderNode, ValidationError> {
        find_node(&self.snapshot.root, Some(folder_id)).ok_or_else(|| {
            debug!(folder_id = %folder_id, "Folder action rejected: folder not in snapshot");
            ValidationError::NotFound(folder_id)
        })
    }

    fn require_mutable(&self, folder_id: FolderId) -> Result<&'a FolderNode, ValidationError> {
        if self.snapshot.is_root(folder_id) {
            debug!(folder_id = %folder_id, "Folder action rejected: root is immutable");
            return Err(ValidationError::RootImmutable);
        }
        self.require_folder(folder_id)
    }

    fn require_parent(&self, folder_id: FolderId) -> Result<FolderId, ValidationError> {
        find_parent_id(&self.snapshot.root, folder_id).ok_or(ValidationError::NotFound(folder_id))
    }
}

fn require_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        debug!("Folder action rejected: empty name");
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}
