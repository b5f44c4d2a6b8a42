//! Shapes consumed directly by the presentation layer.

use favorites_core::types::FolderId;
use favorites_entity::folder::{FolderNode, FolderPath};
use serde::Serialize;

use crate::query::{FavoritesView, subtree_ids};

/// A row of the "move to folder" picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTarget {
    /// Candidate parent folder.
    pub id: FolderId,
    /// Display name; the root shows the caller's label.
    pub name: String,
    /// False for the moved folder and everything below it.
    pub selectable: bool,
}

/// Summary shown on a folder card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCard {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Items placed directly in the folder.
    pub item_count: usize,
    /// Direct subfolders.
    pub subfolder_count: usize,
}

/// Breadcrumb trail to `folder` with the root segment renamed to
/// `root_label`. Empty when the folder no longer exists.
pub fn breadcrumbs(view: &FavoritesView, folder: FolderId, root_label: &str) -> FolderPath {
    let mut path = view.path_to(folder);
    if let Some(root) = path.first_mut() {
        root.name = root_label.to_string();
    }
    path
}

/// Flattened picker rows for moving `folder`.
pub fn move_targets(view: &FavoritesView, folder: FolderId, root_label: &str) -> Vec<MoveTarget> {
    let blocked = subtree_ids(view.root(), folder);
    let root_id = view.snapshot().root_id();

    view.flatten()
        .into_iter()
        .map(|segment| MoveTarget {
            selectable: !blocked.contains(&segment.id),
            name: if segment.id == root_id {
                root_label.to_string()
            } else {
                segment.name
            },
            id: segment.id,
        })
        .collect()
}

/// Card summary of one folder.
pub fn folder_card(node: &FolderNode) -> FolderCard {
    FolderCard {
        id: node.id,
        name: node.name.clone(),
        item_count: node.items.len(),
        subfolder_count: node.children.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_core::types::Exam;
    use favorites_entity::folder::{FolderSegment, FolderSnapshot};

    fn view() -> FavoritesView {
        FavoritesView::new(FolderSnapshot::new(
            Exam::Ld,
            FolderNode::new(0, "root")
                .with_child(
                    FolderNode::new(1, "A")
                        .with_item(3)
                        .with_child(FolderNode::new(2, "B")),
                )
                .with_child(FolderNode::new(4, "C")),
        ))
    }

    #[test]
    fn test_breadcrumbs_use_root_label() {
        let view = view();
        assert_eq!(
            breadcrumbs(&view, FolderId(2), "Suosikit"),
            vec![
                FolderSegment::new(0, "Suosikit"),
                FolderSegment::new(1, "A"),
                FolderSegment::new(2, "B"),
            ]
        );
        assert!(breadcrumbs(&view, FolderId(9), "Suosikit").is_empty());
    }

    #[test]
    fn test_move_targets_block_subtree() {
        let view = view();
        let targets = move_targets(&view, FolderId(1), "Suosikit");
        let selectable: Vec<(i64, bool)> = targets.iter().map(|t| (t.id.get(), t.selectable)).collect();
        assert_eq!(selectable, vec![(0, true), (1, false), (2, false), (4, true)]);
        assert_eq!(targets[0].name, "Suosikit");
    }

    #[test]
    fn test_folder_card() {
        let view = view();
        let card = folder_card(view.find_node(Some(FolderId(1))).unwrap());
        assert_eq!(card.item_count, 1);
        assert_eq!(card.subfolder_count, 1);
    }
}
