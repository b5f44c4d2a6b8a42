//! # favorites-entity
//!
//! Domain models for the favorites engine. The folder tree structs mirror
//! the snapshot document returned by the persistence API; the request
//! structs mirror what the mutation endpoints accept. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod favorite;
pub mod folder;
