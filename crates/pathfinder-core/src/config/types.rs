//! Configuration type definitions

use crate::geometry::DEFAULT_MAX_EDGE_DISTANCE;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name looked up in the working directory when no config is given
pub const CONFIG_FILE_NAME: &str = "pathfinder.toml";

/// Pathfinder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathfinderConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Point pairs further apart than this get no edge
    #[serde(default = "default_max_edge_distance")]
    pub max_edge_distance: f64,

    /// Whether document edges without an explicit `bidirectional` flag
    /// are inserted in both directions
    #[serde(default = "default_bidirectional")]
    pub default_bidirectional: bool,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        PathfinderConfig {
            version: CONFIG_FORMAT_VERSION,
            max_edge_distance: DEFAULT_MAX_EDGE_DISTANCE,
            default_bidirectional: true,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_max_edge_distance() -> f64 {
    DEFAULT_MAX_EDGE_DISTANCE
}

fn default_bidirectional() -> bool {
    true
}
