//! Pure, side-effect-free queries over a folder tree.
//!
//! Every function takes the root by reference and returns derived data.
//! Lookups on missing ids return `None` or an empty collection; nothing
//! here fails.

pub mod index;
pub mod locate;
pub mod path;
pub mod view;

pub use index::{FavoriteIndex, build_favorite_index};
pub use locate::{find_containing_folder_ids, find_node, find_parent_id, subtree_ids};
pub use path::{flatten, path_to};
pub use view::FavoritesView;
