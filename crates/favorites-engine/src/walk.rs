//! Guarded pre-order traversal shared by every query.
//!
//! Snapshots come from the network, so the tree invariants are not
//! trusted: a folder id seen a second time is skipped together with its
//! subtree. The walk uses an explicit stack and visits each id at most
//! once, so it always terminates.

use std::collections::HashSet;

use favorites_core::types::FolderId;
use favorites_entity::folder::FolderNode;
use tracing::warn;

/// A node reached during a walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Distance from the walk's starting node (0 for the start itself).
    pub depth: usize,
    /// The node.
    pub node: &'a FolderNode,
}

/// Pre-order iterator over a folder tree in display order.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<Visit<'a>>,
    visited: HashSet<FolderId>,
}

impl<'a> Preorder<'a> {
    /// Starts a walk at `start`.
    pub fn new(start: &'a FolderNode) -> Self {
        Self {
            stack: vec![Visit {
                depth: 0,
                node: start,
            }],
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            if !self.visited.insert(visit.node.id) {
                warn!(folder_id = %visit.node.id, "Skipping repeated folder id in snapshot");
                continue;
            }

            self.stack
                .extend(visit.node.children.iter().rev().map(|child| Visit {
                    depth: visit.depth + 1,
                    node: child,
                }));

            return Some(visit);
        }
        None
    }
}

/// Returns the nodes from `root` down to the first node with `target`,
/// both inclusive, or `None` when the target is unreachable.
pub fn trail_to(root: &FolderNode, target: FolderId) -> Option<Vec<&FolderNode>> {
    let mut trail: Vec<&FolderNode> = Vec::new();

    for visit in Preorder::new(root) {
        // Pre-order: everything deeper than this node's parent is finished.
        trail.truncate(visit.depth);
        trail.push(visit.node);

        if visit.node.id == target {
            return Some(trail);
        }
    }

    None
}
