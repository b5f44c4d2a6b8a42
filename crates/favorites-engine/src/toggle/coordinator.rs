//! Plans item-folder association changes from the reverse index.

use std::collections::BTreeSet;

use favorites_core::types::{FolderId, ItemId};
use favorites_entity::favorite::{CreateFolderRequest, SetFavoriteFoldersRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intent::{FolderIntentBuilder, ValidationError};
use crate::query::{FavoritesView, find_node};

/// The three choices of the "add to favorites" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "option", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddToFavorites {
    /// File the item at the top level only.
    Favorites,
    /// File the item in exactly these folders.
    Folder(Vec<FolderId>),
    /// Create a new top-level folder and file the item there.
    NewFolder(String),
}

/// What the caller should send next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritePlan {
    /// Desired and current folders already match; send nothing.
    Unchanged,
    /// Send one association change.
    Change(SetFavoriteFoldersRequest),
    /// Create the folder first, then call
    /// [`FavoriteToggle::plan_created_folder`] with the id the API returns.
    CreateFolderFirst(CreateFolderRequest),
}

impl From<Option<SetFavoriteFoldersRequest>> for FavoritePlan {
    fn from(change: Option<SetFavoriteFoldersRequest>) -> Self {
        match change {
            Some(req) => Self::Change(req),
            None => Self::Unchanged,
        }
    }
}

/// Turns a desired folder set into at most one request.
///
/// The index is read, never updated: after the request succeeds the caller
/// refetches and builds a new [`FavoritesView`].
#[derive(Debug, Clone, Copy)]
pub struct FavoriteToggle<'a> {
    view: &'a FavoritesView,
}

impl<'a> FavoriteToggle<'a> {
    /// Creates a coordinator over one view.
    pub fn new(view: &'a FavoritesView) -> Self {
        Self { view }
    }

    /// Plans the change from the item's current folders to `desired`.
    ///
    /// Returns `Ok(None)` when nothing would change. Every desired folder
    /// must exist in the snapshot.
    pub fn plan<I>(
        &self,
        item: ItemId,
        desired: I,
    ) -> Result<Option<SetFavoriteFoldersRequest>, ValidationError>
    where
        I: IntoIterator<Item = FolderId>,
    {
        let desired: BTreeSet<FolderId> = desired.into_iter().collect();
        if let Some(missing) = desired
            .iter()
            .find(|id| find_node(self.view.root(), Some(**id)).is_none())
        {
            debug!(item_id = %item, folder_id = %missing, "Favorite change rejected: unknown folder");
            return Err(ValidationError::NotFound(*missing));
        }

        Ok(self.diff(item, desired))
    }

    /// Plans filing the item in a folder the create call just returned.
    ///
    /// The new folder is not in this snapshot yet, so its existence is taken
    /// from the API response. The item ends up in that folder only, matching
    /// what the "new folder" form option submits.
    pub fn plan_created_folder(
        &self,
        item: ItemId,
        new_folder_id: FolderId,
    ) -> Option<SetFavoriteFoldersRequest> {
        self.diff(item, BTreeSet::from([new_folder_id]))
    }

    fn diff(&self, item: ItemId, desired: BTreeSet<FolderId>) -> Option<SetFavoriteFoldersRequest> {
        let current = self.view.index().current_folders(item);
        let added_folder_ids: Vec<FolderId> = desired.difference(&current).copied().collect();
        let removed_folder_ids: Vec<FolderId> = current.difference(&desired).copied().collect();

        if added_folder_ids.is_empty() && removed_folder_ids.is_empty() {
            debug!(item_id = %item, "Favorite folders unchanged, no request");
            return None;
        }

        debug!(
            item_id = %item,
            added = added_folder_ids.len(),
            removed = removed_folder_ids.len(),
            "Favorite change planned"
        );

        Some(SetFavoriteFoldersRequest {
            exam: self.view.exam(),
            assignment_id: item,
            favorite_folder_ids: desired.into_iter().collect(),
            added_folder_ids,
            removed_folder_ids,
        })
    }

    /// Adds the item to `folder`, keeping its other folders.
    pub fn add_to(
        &self,
        item: ItemId,
        folder: FolderId,
    ) -> Result<Option<SetFavoriteFoldersRequest>, ValidationError> {
        let mut desired = self.view.index().current_folders(item);
        desired.insert(folder);
        self.plan(item, desired)
    }

    /// Removes the item from `folder`, keeping its other folders.
    pub fn remove_from(
        &self,
        item: ItemId,
        folder: FolderId,
    ) -> Result<Option<SetFavoriteFoldersRequest>, ValidationError> {
        let mut desired = self.view.index().current_folders(item);
        desired.remove(&folder);
        self.plan(item, desired)
    }

    /// Removes the item from every folder.
    pub fn unfavorite(
        &self,
        item: ItemId,
    ) -> Result<Option<SetFavoriteFoldersRequest>, ValidationError> {
        self.plan(item, std::iter::empty())
    }

    /// Plans the outcome of the "add to favorites" form.
    pub fn apply_choice(
        &self,
        item: ItemId,
        choice: &AddToFavorites,
    ) -> Result<FavoritePlan, ValidationError> {
        let root_id = self.view.snapshot().root_id();

        match choice {
            AddToFavorites::Favorites => self.plan(item, [root_id]).map(FavoritePlan::from),
            AddToFavorites::Folder(ids) => {
                self.plan(item, ids.iter().copied()).map(FavoritePlan::from)
            }
            AddToFavorites::NewFolder(name) => FolderIntentBuilder::new(self.view.snapshot())
                .create_folder(root_id, name)
                .map(FavoritePlan::CreateFolderFirst),
        }
    }
}
