//! LUDOS favorites: the favorite-folder hierarchy engine.
//!
//! Facade over the workspace crates so applications depend on one package.

pub use favorites_core::config;
pub use favorites_core::error::ErrorKind;
pub use favorites_core::types::{Exam, FolderId, ItemId, ROOT_FOLDER_ID};
pub use favorites_core::{AppError, AppResult};

pub use favorites_entity::favorite;
pub use favorites_entity::folder::{FolderNode, FolderPath, FolderSegment, FolderSnapshot, ItemRef};

pub use favorites_engine::{adapter, integrity, intent, query, toggle};
pub use favorites_engine::{
    AddToFavorites, FavoriteIndex, FavoritePlan, FavoriteToggle, FavoritesView,
    FolderIntentBuilder, ValidationError, ValidationReason,
};
