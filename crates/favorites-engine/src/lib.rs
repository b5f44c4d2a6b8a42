//! # favorites-engine
//!
//! The favorite-folder hierarchy engine. Given one folder tree snapshot it
//! derives read-only views (lookups, breadcrumbs, pick-lists, the
//! item-to-folders index) and turns user actions into validated requests
//! for the persistence API.
//!
//! The engine is synchronous and performs no I/O. It never patches a
//! snapshot: after any mutation the caller refetches and builds a new
//! [`query::FavoritesView`].

pub mod adapter;
pub mod integrity;
pub mod intent;
pub mod query;
pub mod toggle;
pub mod walk;

pub use intent::{FolderIntentBuilder, ValidationError, ValidationReason};
pub use query::{FavoriteIndex, FavoritesView};
pub use toggle::{AddToFavorites, FavoritePlan, FavoriteToggle};
