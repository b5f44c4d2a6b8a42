//! Favorite folder entities.

pub mod model;
pub mod path;
pub mod snapshot;

pub use model::{FolderNode, ItemRef};
pub use path::{FolderPath, FolderSegment};
pub use snapshot::FolderSnapshot;
