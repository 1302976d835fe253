use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a CampusDb instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Path where the node will store its data
    pub storage_path: PathBuf,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data"),
        }
    }
}

impl NodeConfig {
    /// Create a new configuration with the specified storage path
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }
}
