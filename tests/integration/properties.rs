//! Property tests over randomly shaped, well-formed trees.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use ludos_favorites::query::{
    build_favorite_index, find_node, find_parent_id, flatten, path_to, subtree_ids,
};
use ludos_favorites::{FavoriteToggle, FolderId, FolderIntentBuilder, ItemId, ValidationReason};

use crate::helpers::{MAX_ITEM_ID, all_nodes, arb_tree, view_of};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every reachable folder appears in the flattened list exactly once,
    /// root first.
    #[test]
    fn prop_flatten_is_complete(root in arb_tree()) {
        let nodes = all_nodes(&root);
        let flat = flatten(&root);

        prop_assert_eq!(flat.len(), nodes.len());
        prop_assert_eq!(flat[0].id, root.id);

        let flat_ids: HashSet<FolderId> = flat.iter().map(|s| s.id).collect();
        let node_ids: HashSet<FolderId> = nodes.iter().map(|n| n.id).collect();
        prop_assert_eq!(flat_ids.len(), flat.len());
        prop_assert_eq!(flat_ids, node_ids);
    }

    /// A folder is in an item's index entry iff it directly holds the item.
    #[test]
    fn prop_index_matches_containment(root in arb_tree()) {
        let index = build_favorite_index(&root);

        for node in all_nodes(&root) {
            for raw in 0..MAX_ITEM_ID {
                let item = ItemId(raw);
                let indexed = index
                    .folders_for(item)
                    .is_some_and(|folders| folders.contains(&node.id));
                prop_assert_eq!(indexed, node.contains_item(item));
            }
        }
    }

    /// Paths end at the target and step along parent-to-child edges.
    #[test]
    fn prop_path_follows_edges(root in arb_tree()) {
        for node in all_nodes(&root) {
            let path = path_to(&root, node.id);

            prop_assert_eq!(path.first().map(|s| s.id), Some(root.id));
            prop_assert_eq!(path.last().map(|s| s.id), Some(node.id));

            for pair in path.windows(2) {
                let parent = find_node(&root, Some(pair[0].id)).unwrap();
                prop_assert!(parent.has_child(pair[1].id));
            }
        }
    }

    /// The parent lookup agrees with the unique folder listing the child.
    #[test]
    fn prop_parent_is_inverse_of_children(root in arb_tree()) {
        let nodes = all_nodes(&root);
        prop_assert_eq!(find_parent_id(&root, root.id), None);

        for child in nodes.iter().filter(|n| n.id != root.id) {
            let owners: Vec<FolderId> = nodes
                .iter()
                .filter(|n| n.has_child(child.id))
                .map(|n| n.id)
                .collect();
            prop_assert_eq!(owners.len(), 1);
            prop_assert_eq!(find_parent_id(&root, child.id), Some(owners[0]));
        }
    }

    /// A move is cyclic exactly when the target sits in the moved subtree;
    /// every other existing target produces a request.
    #[test]
    fn prop_move_rejects_only_cycles(root in arb_tree()) {
        let view = view_of(root);
        let builder = FolderIntentBuilder::new(view.snapshot());
        let nodes = all_nodes(view.root());

        for folder in nodes.iter().filter(|n| n.id != view.root().id) {
            let subtree: HashSet<FolderId> = all_nodes(folder).iter().map(|n| n.id).collect();
            prop_assert_eq!(&subtree_ids(view.root(), folder.id), &subtree);

            for target in &nodes {
                let result = builder.move_folder(folder.id, target.id);
                if subtree.contains(&target.id) {
                    prop_assert_eq!(
                        result.map_err(|e| e.reason()).err(),
                        Some(ValidationReason::CyclicMove)
                    );
                } else {
                    let req = result.unwrap();
                    prop_assert_eq!(req.parent_id, target.id);
                }
            }
        }
    }

    /// Asking for the folders an item already has never emits a request.
    #[test]
    fn prop_toggle_is_idempotent(root in arb_tree()) {
        let view = view_of(root);
        let toggle = FavoriteToggle::new(&view);

        for raw in 0..MAX_ITEM_ID {
            let item = ItemId(raw);
            let current: BTreeSet<FolderId> = view.index().current_folders(item);
            prop_assert_eq!(toggle.plan(item, current), Ok(None));
        }
    }
}
