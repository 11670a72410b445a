use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::bezier::CURVE_RESOLUTION;
use crate::state::DEFAULT_SAVE_FILE;

/// File the native binary reads its configuration from
pub const CONFIG_FILE: &str = "draw_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup configuration of the drawing app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Where Save writes and Load reads the scene
    pub save_file: PathBuf,
    /// Initial window size in points
    pub window_size: [f32; 2],
    pub control_panel_width: f32,
    /// Line segments per Bezier curve
    pub curve_resolution: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            window_size: [900.0, 600.0],
            control_panel_width: 200.0,
            curve_resolution: CURVE_RESOLUTION,
        }
    }
}

impl DrawConfig {
    /// Reads the config at `path`. A missing or empty file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like `load`, but logs any error and falls back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|err| {
            warn!("{}: {}; using defaults", path.as_ref().display(), err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = DrawConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DrawConfig::default());
        assert_eq!(config.save_file, PathBuf::from("save.txt"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "curve_resolution": 8 }"#).unwrap();
        let config = DrawConfig::load(&path).unwrap();
        assert_eq!(config.curve_resolution, 8);
        assert_eq!(config.control_panel_width, 200.0);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(DrawConfig::load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(DrawConfig::load_or_default(&path), DrawConfig::default());
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = DrawConfig {
            save_file: PathBuf::from("drawing.txt"),
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(DrawConfig::load(&path).unwrap(), config);
    }
}
