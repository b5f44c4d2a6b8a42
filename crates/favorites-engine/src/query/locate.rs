//! Folder lookups.

use std::collections::HashSet;

use favorites_core::types::{FolderId, ItemId};
use favorites_entity::folder::FolderNode;

use crate::walk::{Preorder, trail_to};

/// Finds a folder by id.
///
/// `None` as the target means "no folder selected yet" and yields the root.
/// An id that does not exist anywhere in the tree yields `None`.
pub fn find_node(root: &FolderNode, target: Option<FolderId>) -> Option<&FolderNode> {
    let Some(target) = target else {
        return Some(root);
    };

    Preorder::new(root)
        .map(|visit| visit.node)
        .find(|node| node.id == target)
}

/// Returns the id of the folder whose direct children include `child`.
///
/// The root has no parent, so both the root and unknown ids yield `None`.
pub fn find_parent_id(root: &FolderNode, child: FolderId) -> Option<FolderId> {
    let trail = trail_to(root, child)?;
    let parent_index = trail.len().checked_sub(2)?;
    Some(trail[parent_index].id)
}

/// Returns every folder, at any depth, that directly holds `item`.
///
/// Containment is per folder: a folder is listed regardless of whether its
/// ancestors or descendants hold the item too. Order is pre-order.
pub fn find_containing_folder_ids(root: &FolderNode, item: ItemId) -> Vec<FolderId> {
    Preorder::new(root)
        .filter(|visit| visit.node.contains_item(item))
        .map(|visit| visit.node.id)
        .collect()
}

/// Returns the ids of `folder` and all of its descendants, or an empty set
/// when the folder does not exist.
pub fn subtree_ids(root: &FolderNode, folder: FolderId) -> HashSet<FolderId> {
    match find_node(root, Some(folder)) {
        Some(node) => Preorder::new(node).map(|visit| visit.node.id).collect(),
        None => HashSet::new(),
    }
}
