//! Configuration for pathfinder
//!
//! Read from `--config <FILE>` or `pathfinder.toml` in the working directory.
//! Every field is optional and falls back to its default.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{PathfinderError, Result};

pub use types::{PathfinderConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION};

impl PathfinderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathfinderConfig = toml::from_str(&content)?;
        config.validate()?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer pathfinder"
            );
        }

        Ok(config)
    }

    /// Load `pathfinder.toml` from `dir` if present, otherwise the defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfinderError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_edge_distance.is_finite() || self.max_edge_distance < 0.0 {
            bail_invalid!("max_edge_distance", self.max_edge_distance);
        }
        Ok(())
    }
}
