//! Snapshot integrity checks.
//!
//! A shared child or a cycle in the source document can only show up as a
//! repeated folder id once the document is deserialized into an owned tree,
//! so duplicate detection covers both.

use std::collections::{BTreeSet, HashSet};

use favorites_core::error::AppError;
use favorites_core::result::AppResult;
use favorites_core::types::FolderId;
use favorites_entity::folder::FolderNode;

/// Verifies the root carries the reserved id and no folder id repeats.
pub fn check_integrity(root: &FolderNode, expected_root_id: FolderId) -> AppResult<()> {
    if root.id != expected_root_id {
        return Err(AppError::integrity(format!(
            "Snapshot root has id {} but the favorites root is {}",
            root.id, expected_root_id
        )));
    }

    let duplicates = duplicate_ids(root);
    if !duplicates.is_empty() {
        let ids: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
        return Err(AppError::integrity(format!(
            "Snapshot contains repeated folder ids: {}",
            ids.join(", ")
        )));
    }

    Ok(())
}

/// Collects every folder id that appears more than once.
///
/// The subtree below a repeated node is not descended into.
pub fn duplicate_ids(root: &FolderNode) -> BTreeSet<FolderId> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !seen.insert(node.id) {
            duplicates.insert(node.id);
            continue;
        }
        stack.extend(node.children.iter());
    }

    duplicates
}
