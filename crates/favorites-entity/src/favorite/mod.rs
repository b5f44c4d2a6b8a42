//! Request payloads accepted by the persistence API's favorites endpoints.

pub mod request;

pub use request::{
    CreateFolderRequest, DeleteFolderRequest, FavoriteMutation, SetFavoriteFoldersRequest,
    UpdateFolderRequest,
};
