//! Configuration loading for Shatkona.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shatkona::config::ShatkonaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = ShatkonaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = ShatkonaConfig::default();
//!
//! // Convert to runtime config
//! let map = HexOccupancyMap::new(config.to_map_config())?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Grid dimensions, cell size, frame pose |
//! | [`LogOddsConfig`](crate::grid::LogOddsConfig) | Update increments and thresholds |
//! | [`SensorSection`] | Rays per sweep and max range |
//! | [`TracerConfig`](crate::grid::TracerConfig) | Step limit per ray |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 20
//!   height: 20
//!   cell_size: 0.5        # circumradius, meters
//!   origin_x: 0.0
//!   origin_y: 0.0
//!   rotation: 0.0
//! log_odds:
//!   l_occupied: 0.01
//!   l_free: -0.01
//! sensor:
//!   num_rays: 12
//!   max_range: 10.0
//! tracer:
//!   max_steps: 100
//! ```

mod defaults;
mod error;
mod grid;
mod sensor;
mod shatkona;

pub use error::ConfigLoadError;
pub use shatkona::{DEFAULT_CONFIG_PATH, ShatkonaConfig};

pub use grid::GridSection;
pub use sensor::SensorSection;
