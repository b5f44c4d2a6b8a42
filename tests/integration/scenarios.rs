//! End-to-end scenarios over literal trees and a server-shaped snapshot.

use std::collections::BTreeSet;

use ludos_favorites::adapter::{breadcrumbs, move_targets};
use ludos_favorites::config::engine::EngineConfig;
use ludos_favorites::favorite::FavoriteMutation;
use ludos_favorites::query::{find_node, path_to};
use ludos_favorites::{
    AddToFavorites, ErrorKind, Exam, FavoritePlan, FavoriteToggle, FavoritesView,
    FolderIntentBuilder, FolderNode, FolderSegment, FolderId, ItemId, ValidationReason,
};

use crate::helpers::{SNAPSHOT_JSON, chain_tree, view_of};

#[test]
fn test_path_to_nested_folder() {
    let root = chain_tree();
    assert_eq!(
        path_to(&root, FolderId(2)),
        vec![
            FolderSegment::new(0, "root"),
            FolderSegment::new(1, "A"),
            FolderSegment::new(2, "B"),
        ]
    );
}

#[test]
fn test_item_in_two_folders_indexes_both() {
    let view = view_of(chain_tree());
    assert_eq!(
        view.index().folders_for(ItemId(42)),
        Some(&BTreeSet::from([FolderId(1), FolderId(2)]))
    );
}

#[test]
fn test_move_into_descendant_builds_nothing() {
    let view = view_of(chain_tree());
    let err = FolderIntentBuilder::new(view.snapshot())
        .move_folder(FolderId(1), FolderId(2))
        .unwrap_err();
    assert_eq!(err.reason(), ValidationReason::CyclicMove);
}

#[test]
fn test_missing_folder_is_none() {
    assert!(find_node(&chain_tree(), Some(FolderId(99))).is_none());
}

#[test]
fn test_toggle_adds_single_folder() {
    let root = FolderNode::new(0, "root")
        .with_child(FolderNode::new(1, "A").with_item(7))
        .with_child(FolderNode::new(3, "C"));
    let view = view_of(root);

    let req = FavoriteToggle::new(&view)
        .plan(ItemId(7), [FolderId(1), FolderId(3)])
        .unwrap()
        .expect("one request");
    assert_eq!(req.added_folder_ids, vec![FolderId(3)]);
    assert!(req.removed_folder_ids.is_empty());
}

#[test]
fn test_server_snapshot_round() {
    let view = FavoritesView::from_json(Exam::Puhvi, SNAPSHOT_JSON, &EngineConfig::default())
        .expect("valid snapshot");

    assert_eq!(view.index().favorite_count(), 3);
    assert_eq!(
        view.containing_folder_ids(ItemId(100)),
        vec![FolderId(0), FolderId(11)]
    );

    let crumbs = breadcrumbs(&view, FolderId(12), "Suosikkien päätaso");
    let names: Vec<&str> = crumbs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Suosikkien päätaso", "Kevät", "Viikko 1"]);

    let selectable: Vec<i64> = move_targets(&view, FolderId(11), "Suosikit")
        .into_iter()
        .filter(|t| t.selectable)
        .map(|t| t.id.get())
        .collect();
    assert_eq!(selectable, vec![0, 13]);
}

#[test]
fn test_delete_then_refetch_flow() {
    let view = FavoritesView::from_json(Exam::Ld, SNAPSHOT_JSON, &EngineConfig::default()).unwrap();
    let req = FolderIntentBuilder::new(view.snapshot())
        .delete_folder(FolderId(12))
        .unwrap();
    assert_eq!(req.parent_id, FolderId(11));

    let value = serde_json::to_value(FavoriteMutation::from(req)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"kind": "deleteFolder", "exam": "LD", "folderId": 12, "parentId": 11})
    );

    // The server's next snapshot no longer has folder 12; the old selection
    // resolves to "not found" rather than to the root.
    let refetched = view_of(
        FolderNode::new(0, "Suosikit").with_child(FolderNode::new(11, "Kevät")),
    );
    assert!(refetched.find_node(Some(FolderId(12))).is_none());
    assert!(refetched.path_to(FolderId(12)).is_empty());
    assert_eq!(refetched.find_node(None).map(|n| n.id), Some(FolderId(0)));
}

#[test]
fn test_new_folder_choice_then_assign() {
    let view = FavoritesView::from_json(Exam::Suko, SNAPSHOT_JSON, &EngineConfig::default()).unwrap();
    let toggle = FavoriteToggle::new(&view);

    let plan = toggle
        .apply_choice(ItemId(102), &AddToFavorites::NewFolder("Tärkeät".to_string()))
        .unwrap();
    let create = match plan {
        FavoritePlan::CreateFolderFirst(create) => create,
        other => panic!("expected a create request, got {other:?}"),
    };
    assert_eq!(create.parent_id, FolderId(0));
    assert_eq!(create.exam, Exam::Suko);

    // The create call answers with id 500; the item is filed there right
    // away, before any refetch.
    let req = toggle
        .plan_created_folder(ItemId(102), FolderId(500))
        .expect("one request");
    assert_eq!(req.favorite_folder_ids, vec![FolderId(500)]);
    assert_eq!(req.added_folder_ids, vec![FolderId(500)]);
    assert_eq!(req.removed_folder_ids, vec![FolderId(12)]);

    // Plain planning still only accepts folders the snapshot knows.
    assert_eq!(
        toggle.plan(ItemId(102), [FolderId(500)]).unwrap_err().reason(),
        ValidationReason::NotFound
    );
}

#[test]
fn test_duplicate_ids_are_an_integrity_error() {
    let json = r#"{
        "id": 0, "name": "root", "assignmentCards": [],
        "subfolders": [
            {"id": 1, "name": "A", "assignmentCards": [], "subfolders": []},
            {"id": 1, "name": "A", "assignmentCards": [], "subfolders": []}
        ]
    }"#;
    let err = FavoritesView::from_json(Exam::Suko, json, &EngineConfig::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Integrity);
    assert!(!err.is_recoverable());
}

#[test]
fn test_corrupt_tree_queries_still_terminate() {
    let looped = FolderNode::new(1, "A").with_child(FolderNode::new(2, "B").with_item(5));
    let root = FolderNode::new(0, "root")
        .with_child(looped.clone().with_child(looped))
        .with_child(FolderNode::new(0, "root again").with_item(5));
    let view = view_of(root);

    let ids: Vec<i64> = view.flatten().iter().map(|s| s.id.get()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(view.containing_folder_ids(ItemId(5)), vec![FolderId(2)]);
    assert_eq!(view.find_parent_id(FolderId(2)), Some(FolderId(1)));
}
