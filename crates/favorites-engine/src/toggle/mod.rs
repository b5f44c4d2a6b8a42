//! Favorite toggle coordination.

pub mod coordinator;

pub use coordinator::{AddToFavorites, FavoritePlan, FavoriteToggle};
