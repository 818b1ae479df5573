//! Viewer configuration loaded from TOML.

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the point cloud viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Points file to load. The first command line argument overrides it.
    pub points_file: Option<PathBuf>,
    /// Levels of the octree drawn below the root.
    pub octree_depth: usize,
    /// Levels the partition tree may create.
    pub partition_depth: usize,
    /// Edge length of the cube drawn for each point.
    pub point_size: f32,
    pub point_color: [f32; 4],
    pub octree_color: [f32; 4],
    pub marker_color: [f32; 4],
    /// Separating line colors for x, y and z splits.
    pub split_colors: [[f32; 4]; 3],
    pub background: [f32; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            points_file: None,
            octree_depth: 3,
            partition_depth: 6,
            point_size: 0.05,
            point_color: [0.9, 0.9, 0.9, 1.0],
            octree_color: [0.3, 0.6, 1.0, 1.0],
            marker_color: [1.0, 1.0, 0.0, 1.0],
            split_colors: [
                [1.0, 0.2, 0.2, 1.0],
                [0.2, 1.0, 0.2, 1.0],
                [0.3, 0.3, 1.0, 1.0],
            ],
            background: [0.06, 0.06, 0.1, 1.0],
        }
    }
}

impl ViewerConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("loading config from {}", path.display());
            Self::load(path)
        } else {
            info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
