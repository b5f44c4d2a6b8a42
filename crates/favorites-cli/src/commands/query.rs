//! Read-only snapshot queries.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use favorites_core::error::AppError;
use favorites_core::types::{FolderId, ItemId};
use favorites_engine::FavoritesView;
use favorites_engine::adapter::{self, MoveTarget};
use favorites_engine::query::find_containing_folder_ids;
use favorites_engine::walk::Preorder;
use favorites_entity::folder::FolderSegment;

/// Query subcommands
#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Print the folder tree
    Tree,
    /// Show one folder (the root when no id is given)
    Find {
        /// Folder ID
        folder: Option<FolderId>,
    },
    /// Show the parent of a folder
    Parent {
        /// Folder ID
        folder: FolderId,
    },
    /// Show the breadcrumb path to a folder
    Path {
        /// Folder ID
        folder: FolderId,
        /// Label shown instead of the root folder's name
        #[arg(long)]
        root_label: Option<String>,
    },
    /// List every folder, root first
    Flatten,
    /// List the folders holding an item
    Containing {
        /// Item ID
        item: ItemId,
    },
    /// Print the item-to-folders index
    Index,
    /// List the folders a folder may be moved into
    Targets {
        /// Folder being moved
        folder: FolderId,
        /// Label shown instead of the root folder's name
        #[arg(long, default_value = "Favorites")]
        root_label: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
}

impl From<FolderSegment> for FolderRow {
    fn from(segment: FolderSegment) -> Self {
        Self {
            id: segment.id.get(),
            name: segment.name,
        }
    }
}

/// Index display row
#[derive(Debug, Serialize, Tabled)]
struct IndexRow {
    /// Item ID
    item: i64,
    /// Folders holding the item
    folders: String,
}

/// Move picker row
#[derive(Debug, Serialize, Tabled)]
struct TargetRow {
    /// Folder ID
    id: i64,
    /// Name
    name: String,
    /// Whether the folder can be picked
    selectable: bool,
}

impl From<MoveTarget> for TargetRow {
    fn from(target: MoveTarget) -> Self {
        Self {
            id: target.id.get(),
            name: target.name,
            selectable: target.selectable,
        }
    }
}

/// Execute query commands
pub fn execute(
    command: &QueryCommand,
    view: &FavoritesView,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        QueryCommand::Tree => {
            for visit in Preorder::new(view.root()) {
                let indent = "  ".repeat(visit.depth);
                println!(
                    "{}├── {} [{}] ({} items)",
                    indent,
                    visit.node.name,
                    visit.node.id,
                    visit.node.items.len()
                );
            }
        }
        QueryCommand::Find { folder } => match view.find_node(*folder) {
            Some(node) => output::print_record(&adapter::folder_card(node), format),
            None => output::print_warning("Folder not found"),
        },
        QueryCommand::Parent { folder } => match view.find_parent_id(*folder) {
            Some(parent) => output::print_success(&format!("Parent of {}: {}", folder, parent)),
            None => output::print_warning(&format!("Folder {} has no parent", folder)),
        },
        QueryCommand::Path { folder, root_label } => {
            let path = match root_label {
                Some(label) => adapter::breadcrumbs(view, *folder, label),
                None => view.path_to(*folder),
            };
            let rows: Vec<FolderRow> = path.into_iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        QueryCommand::Flatten => {
            let rows: Vec<FolderRow> = view.flatten().into_iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        QueryCommand::Containing { item } => {
            let rows: Vec<FolderRow> = find_containing_folder_ids(view.root(), *item)
                .into_iter()
                .filter_map(|id| view.find_node(Some(id)))
                .map(|node| FolderRow::from(node.segment()))
                .collect();
            output::print_list(&rows, format);
        }
        QueryCommand::Index => {
            let rows: Vec<IndexRow> = view
                .index()
                .iter()
                .map(|(item, folders)| IndexRow {
                    item: item.get(),
                    folders: folders
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                })
                .collect();
            output::print_list(&rows, format);
        }
        QueryCommand::Targets { folder, root_label } => {
            let rows: Vec<TargetRow> = adapter::move_targets(view, *folder, root_label)
                .into_iter()
                .map(TargetRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
