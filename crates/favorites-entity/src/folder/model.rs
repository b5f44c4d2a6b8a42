//! Folder tree node model.

use favorites_core::types::{FolderId, ItemId};
use serde::{Deserialize, Serialize};

use super::path::FolderSegment;

/// A reference from a folder to a favorited content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// The referenced item ("assignment card" id on the wire).
    #[serde(rename = "id", alias = "itemId")]
    pub item_id: ItemId,
}

impl ItemRef {
    /// Creates a reference to the given item.
    pub fn new(item_id: i64) -> Self {
        Self {
            item_id: ItemId(item_id),
        }
    }
}

/// A node in a favorites folder tree.
///
/// `items` and `children` are required on the wire; a document missing
/// either fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID, unique within the tree.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Items placed directly in this folder, in display order.
    #[serde(rename = "assignmentCards", alias = "items")]
    pub items: Vec<ItemRef>,
    /// Subfolders, in display order.
    #[serde(rename = "subfolders", alias = "children")]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Creates an empty folder from a raw id.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: FolderId(id),
            name: name.into(),
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an item reference.
    #[must_use]
    pub fn with_item(mut self, item_id: i64) -> Self {
        self.items.push(ItemRef::new(item_id));
        self
    }

    /// Adds a subfolder.
    #[must_use]
    pub fn with_child(mut self, child: FolderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this folder directly holds the item.
    pub fn contains_item(&self, item_id: ItemId) -> bool {
        self.items.iter().any(|item| item.item_id == item_id)
    }

    /// Whether the given folder is a direct child of this one.
    pub fn has_child(&self, folder_id: FolderId) -> bool {
        self.children.iter().any(|child| child.id == folder_id)
    }

    /// The `{id, name}` pair of this folder.
    pub fn segment(&self) -> FolderSegment {
        FolderSegment {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
