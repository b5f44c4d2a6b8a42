//! Mutation planning commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use favorites_core::error::AppError;
use favorites_core::types::{FolderId, ItemId};
use favorites_engine::{AddToFavorites, FavoritePlan, FavoriteToggle, FavoritesView, FolderIntentBuilder};
use favorites_entity::favorite::FavoriteMutation;

/// Arguments for plan commands
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Plan subcommand
    #[command(subcommand)]
    pub command: PlanCommand,
}

/// Plan subcommands
#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// Create a folder
    Create {
        /// Parent folder ID
        #[arg(long)]
        parent: FolderId,
        /// Folder name
        #[arg(long)]
        name: String,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        #[arg(long)]
        folder: FolderId,
        /// New name
        #[arg(long)]
        name: String,
    },
    /// Move a folder under a new parent
    Move {
        /// Folder ID
        #[arg(long)]
        folder: FolderId,
        /// New parent folder ID
        #[arg(long)]
        to: FolderId,
    },
    /// Delete a folder
    Delete {
        /// Folder ID
        #[arg(long)]
        folder: FolderId,
    },
    /// Set the folders holding an item
    Favorite {
        /// Item ID
        #[arg(long)]
        item: ItemId,
        /// Comma-separated folder IDs; omit to file at the top level
        #[arg(long, value_delimiter = ',')]
        folders: Vec<FolderId>,
        /// Create a new top-level folder with this name instead
        #[arg(long, conflicts_with = "folders")]
        new_folder: Option<String>,
        /// File the item in a folder the create call just returned
        #[arg(long, conflicts_with_all = ["folders", "new_folder"])]
        created_folder: Option<FolderId>,
    },
    /// Remove an item from every folder
    Unfavorite {
        /// Item ID
        #[arg(long)]
        item: ItemId,
    },
}

/// Execute plan commands
pub fn execute(args: &PlanArgs, view: &FavoritesView, format: OutputFormat) -> Result<(), AppError> {
    let builder = FolderIntentBuilder::new(view.snapshot());
    let toggle = FavoriteToggle::new(view);

    let mutation: FavoriteMutation = match &args.command {
        PlanCommand::Create { parent, name } => builder.create_folder(*parent, name)?.into(),
        PlanCommand::Rename { folder, name } => builder.rename_folder(*folder, name)?.into(),
        PlanCommand::Move { folder, to } => builder.move_folder(*folder, *to)?.into(),
        PlanCommand::Delete { folder } => builder.delete_folder(*folder)?.into(),
        PlanCommand::Favorite {
            item,
            created_folder: Some(created),
            ..
        } => match toggle.plan_created_folder(*item, *created) {
            Some(req) => req.into(),
            None => {
                print_unchanged(*item);
                return Ok(());
            }
        },
        PlanCommand::Favorite {
            item,
            folders,
            new_folder,
            created_folder: None,
        } => {
            let choice = match (new_folder, folders.is_empty()) {
                (Some(name), _) => AddToFavorites::NewFolder(name.clone()),
                (None, true) => AddToFavorites::Favorites,
                (None, false) => AddToFavorites::Folder(folders.clone()),
            };
            match toggle.apply_choice(*item, &choice)? {
                FavoritePlan::Unchanged => {
                    print_unchanged(*item);
                    return Ok(());
                }
                FavoritePlan::Change(req) => req.into(),
                FavoritePlan::CreateFolderFirst(req) => req.into(),
            }
        }
        PlanCommand::Unfavorite { item } => match toggle.unfavorite(*item)? {
            Some(req) => req.into(),
            None => {
                print_unchanged(*item);
                return Ok(());
            }
        },
    };

    output::print_record(&mutation, format);
    Ok(())
}

fn print_unchanged(item: ItemId) {
    output::print_success(&format!("Item {} already in the requested folders, nothing to send", item));
}
