//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::types::{FolderId, ROOT_FOLDER_ID};

/// Settings for snapshot parsing and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The reserved id every snapshot root must carry.
    #[serde(default = "default_root_folder_id")]
    pub root_folder_id: FolderId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root_folder_id: default_root_folder_id(),
        }
    }
}

fn default_root_folder_id() -> FolderId {
    ROOT_FOLDER_ID
}
