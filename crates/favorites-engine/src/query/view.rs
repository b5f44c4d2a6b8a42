//! Per-snapshot view that builds the reverse index once and reuses it.

use favorites_core::config::engine::EngineConfig;
use favorites_core::result::AppResult;
use favorites_core::types::{Exam, FolderId, ItemId};
use favorites_entity::folder::{FolderNode, FolderPath, FolderSegment, FolderSnapshot};
use tracing::debug;

use super::index::{FavoriteIndex, build_favorite_index};
use super::{locate, path};
use crate::integrity::check_integrity;

/// One snapshot plus its reverse index.
///
/// Build a new view for every refetched snapshot; a view is never updated.
#[derive(Debug, Clone)]
pub struct FavoritesView {
    snapshot: FolderSnapshot,
    index: FavoriteIndex,
}

impl FavoritesView {
    /// Builds the view for an already parsed snapshot.
    pub fn new(snapshot: FolderSnapshot) -> Self {
        let index = build_favorite_index(&snapshot.root);
        debug!(
            exam = %snapshot.exam,
            favorites = index.favorite_count(),
            "Favorite index built"
        );
        Self { snapshot, index }
    }

    /// Parses a snapshot document, checks its integrity, and builds the view.
    pub fn from_json(exam: Exam, json: &str, config: &EngineConfig) -> AppResult<Self> {
        let snapshot = FolderSnapshot::from_json(exam, json)?;
        check_integrity(&snapshot.root, config.root_folder_id)?;
        Ok(Self::new(snapshot))
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &FolderSnapshot {
        &self.snapshot
    }

    /// The top-level folder.
    pub fn root(&self) -> &FolderNode {
        &self.snapshot.root
    }

    /// The exam scope.
    pub fn exam(&self) -> Exam {
        self.snapshot.exam
    }

    /// The reverse index.
    pub fn index(&self) -> &FavoriteIndex {
        &self.index
    }

    /// See [`locate::find_node`].
    pub fn find_node(&self, target: Option<FolderId>) -> Option<&FolderNode> {
        locate::find_node(self.root(), target)
    }

    /// See [`locate::find_parent_id`].
    pub fn find_parent_id(&self, child: FolderId) -> Option<FolderId> {
        locate::find_parent_id(self.root(), child)
    }

    /// Folders holding the item, answered from the index in ascending id
    /// order.
    pub fn containing_folder_ids(&self, item: ItemId) -> Vec<FolderId> {
        self.index.current_folders(item).into_iter().collect()
    }

    /// See [`path::path_to`].
    pub fn path_to(&self, target: FolderId) -> FolderPath {
        path::path_to(self.root(), target)
    }

    /// See [`path::flatten`].
    pub fn flatten(&self) -> Vec<FolderSegment> {
        path::flatten(self.root())
    }

    /// Whether the item is favorited in any folder.
    pub fn is_favorite(&self, item: ItemId) -> bool {
        self.index.is_favorite(item)
    }
}
