//! Main ShatkonaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{LogOddsConfig, MapConfig, TracerConfig};

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::sensor::SensorSection;

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full Shatkona configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct ShatkonaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Log-odds increments and classification thresholds
    #[serde(default)]
    pub log_odds: LogOddsConfig,

    /// Sensor settings
    #[serde(default)]
    pub sensor: SensorSection,

    /// Tracer limits
    #[serde(default)]
    pub tracer: TracerConfig,
}

impl ShatkonaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigLoadError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Load from [`DEFAULT_CONFIG_PATH`], or defaults if it does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to MapConfig for HexOccupancyMap
    pub fn to_map_config(&self) -> MapConfig {
        MapConfig {
            grid: self.grid.to_grid_config(),
            log_odds: self.log_odds.clone(),
            tracer: self.tracer.clone(),
        }
    }
}
