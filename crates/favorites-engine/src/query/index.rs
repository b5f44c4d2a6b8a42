//! Reverse index from item to the folders holding it.

use std::collections::{BTreeMap, BTreeSet};

use favorites_core::types::{FolderId, ItemId};
use favorites_entity::folder::FolderNode;
use serde::Serialize;

use crate::walk::Preorder;

/// Maps each favorited item to the set of folders that directly hold it.
///
/// Rebuilt from every new snapshot; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoriteIndex {
    folders_by_item: BTreeMap<ItemId, BTreeSet<FolderId>>,
}

impl FavoriteIndex {
    /// Folders holding the item, or `None` when it is not a favorite.
    pub fn folders_for(&self, item: ItemId) -> Option<&BTreeSet<FolderId>> {
        self.folders_by_item.get(&item)
    }

    /// Owned copy of the folders holding the item (empty when none).
    pub fn current_folders(&self, item: ItemId) -> BTreeSet<FolderId> {
        self.folders_for(item).cloned().unwrap_or_default()
    }

    /// Whether the item is in at least one folder.
    pub fn is_favorite(&self, item: ItemId) -> bool {
        self.folders_by_item.contains_key(&item)
    }

    /// Number of distinct favorited items.
    pub fn favorite_count(&self) -> usize {
        self.folders_by_item.len()
    }

    /// Whether no item is favorited.
    pub fn is_empty(&self) -> bool {
        self.folders_by_item.is_empty()
    }

    /// Iterates items in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &BTreeSet<FolderId>)> {
        self.folders_by_item.iter().map(|(item, folders)| (*item, folders))
    }
}

/// Builds the index in a single traversal that visits every folder,
/// root included, once.
pub fn build_favorite_index(root: &FolderNode) -> FavoriteIndex {
    let mut folders_by_item: BTreeMap<ItemId, BTreeSet<FolderId>> = BTreeMap::new();

    for visit in Preorder::new(root) {
        for item in &visit.node.items {
            folders_by_item
                .entry(item.item_id)
                .or_default()
                .insert(visit.node.id);
        }
    }

    FavoriteIndex { folders_by_item }
}
