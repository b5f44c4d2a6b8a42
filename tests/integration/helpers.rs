//! Shared tree builders and strategies for integration tests.

use proptest::prelude::*;
use proptest::sample::Index;

use ludos_favorites::{Exam, FavoritesView, FolderNode, FolderSnapshot};

/// Largest item id generated by [`arb_tree`].
pub const MAX_ITEM_ID: i64 = 12;

/// A snapshot document in the shape the favorites API returns.
pub const SNAPSHOT_JSON: &str = r#"{
    "id": 0,
    "name": "Suosikit",
    "assignmentCards": [{"id": 100, "nameFi": "Juhlapuhe"}],
    "subfolders": [
        {
            "id": 11,
            "name": "Kevät",
            "assignmentCards": [{"id": 100}, {"id": 101}],
            "subfolders": [
                {"id": 12, "name": "Viikko 1", "assignmentCards": [{"id": 102}], "subfolders": []}
            ]
        },
        {"id": 13, "name": "Syksy", "assignmentCards": [], "subfolders": []}
    ]
}"#;

/// root{0} -> A{1} -> B{2}, with item 42 in A and B.
pub fn chain_tree() -> FolderNode {
    FolderNode::new(0, "root").with_child(
        FolderNode::new(1, "A")
            .with_item(42)
            .with_child(FolderNode::new(2, "B").with_item(42)),
    )
}

/// Wraps a tree in a view for the SUKO exam.
pub fn view_of(root: FolderNode) -> FavoritesView {
    FavoritesView::new(FolderSnapshot::new(Exam::Suko, root))
}

/// Every node of the tree, depth first, found by plain recursion.
pub fn all_nodes(root: &FolderNode) -> Vec<&FolderNode> {
    fn collect<'a>(node: &'a FolderNode, out: &mut Vec<&'a FolderNode>) {
        out.push(node);
        for child in &node.children {
            collect(child, out);
        }
    }

    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

/// Random well-formed trees with ids `0..=n`, the root being 0.
///
/// Node `i` picks its parent among the nodes created before it, so the
/// result is always a strict tree.
pub fn arb_tree() -> impl Strategy<Value = FolderNode> {
    let items = || prop::collection::vec(0..MAX_ITEM_ID, 0..4);
    (
        items(),
        prop::collection::vec((any::<Index>(), items()), 0..24),
    )
        .prop_map(|(root_items, specs)| build_tree(root_items, &specs))
}

fn build_tree(root_items: Vec<i64>, specs: &[(Index, Vec<i64>)]) -> FolderNode {
    let count = specs.len() + 1;
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut items: Vec<Vec<i64>> = vec![root_items];

    for (offset, (parent, node_items)) in specs.iter().enumerate() {
        let id = offset + 1;
        children[parent.index(id)].push(id);
        items.push(node_items.clone());
    }

    fn build(id: usize, children: &[Vec<usize>], items: &[Vec<i64>]) -> FolderNode {
        let mut node = FolderNode::new(id as i64, format!("F{id}"));
        for item in &items[id] {
            node = node.with_item(*item);
        }
        for child in &children[id] {
            node = node.with_child(build(*child, children, items));
        }
        node
    }

    build(0, &children, &items)
}
