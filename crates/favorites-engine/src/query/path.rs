//! Breadcrumb paths and flattened pick-lists.

use favorites_core::types::FolderId;
use favorites_entity::folder::{FolderNode, FolderPath, FolderSegment};

use crate::walk::{Preorder, trail_to};

/// Returns the `{id, name}` segments from the root to `target`, both
/// inclusive. Empty when the target is unreachable.
pub fn path_to(root: &FolderNode, target: FolderId) -> FolderPath {
    trail_to(root, target)
        .map(|trail| trail.into_iter().map(FolderNode::segment).collect())
        .unwrap_or_default()
}

/// Lists every folder exactly once, root first, then each subfolder's own
/// listing in display order.
pub fn flatten(root: &FolderNode) -> Vec<FolderSegment> {
    Preorder::new(root).map(|visit| visit.node.segment()).collect()
}
