//! Configuration types for the hex occupancy grid.

use crate::core::{Pose2D, WorldPoint};
use crate::error::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Grid configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,

    /// Number of rows
    pub height: usize,

    /// Hexagon circumradius in meters (center to corner)
    pub cell_size: f32,

    /// Pose of the grid frame in world coordinates.
    /// Cell (0, 0) is centered at this pose's position.
    #[serde(default)]
    pub frame: Pose2D,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            cell_size: 0.5,
            frame: Pose2D::identity(),
        }
    }
}

impl GridConfig {
    /// Create a configuration with the grid frame at the world origin.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            frame: Pose2D::identity(),
        }
    }

    /// Place the grid frame at `origin`, rotated by `rotation` radians.
    pub fn with_frame(mut self, origin: WorldPoint, rotation: f32) -> Self {
        self.frame = Pose2D::new(origin.x, origin.y, rotation);
        self
    }

    /// Check dimensions, cell size and frame.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::InvalidInput(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(MapError::InvalidInput(format!(
                "grid dimensions {}x{} exceed cell index range",
                self.width, self.height
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(MapError::InvalidInput(format!(
                "cell size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if !self.frame.is_finite() {
            return Err(MapError::InvalidInput(format!(
                "grid frame is not finite: {:?}",
                self.frame
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Memory used by the log-odds array in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.cell_count() * std::mem::size_of::<f32>()
    }
}

/// Log-odds increments applied by ray updates.
///
/// - Log-odds: L(x) = ln(P(x) / (1 - P(x)))
/// - Bayesian update: L_new = L_old + L_observation
///
/// No clamping is applied; repeated consistent observations saturate
/// toward ±∞. The thresholds only drive classification counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogOddsConfig {
    /// Increment for the terminal cell of a ray that hit an obstacle.
    #[serde(default = "default_l_occupied")]
    pub l_occupied: f32,

    /// Increment for every cell a ray passed through (free-space evidence).
    #[serde(default = "default_l_free")]
    pub l_free: f32,

    /// Cells above this log-odds count as occupied. P ≈ 0.7
    #[serde(default = "default_occupied_threshold")]
    pub occupied_threshold: f32,

    /// Cells below this log-odds count as free. P ≈ 0.3
    #[serde(default = "default_free_threshold")]
    pub free_threshold: f32,
}

fn default_l_occupied() -> f32 {
    0.01
}
fn default_l_free() -> f32 {
    -0.01
}
fn default_occupied_threshold() -> f32 {
    0.85
}
fn default_free_threshold() -> f32 {
    -0.85
}

impl Default for LogOddsConfig {
    fn default() -> Self {
        Self {
            l_occupied: default_l_occupied(),
            l_free: default_l_free(),
            occupied_threshold: default_occupied_threshold(),
            free_threshold: default_free_threshold(),
        }
    }
}

impl LogOddsConfig {
    /// Equal-magnitude increments: `+delta` on hit, `-delta` on free space.
    pub fn symmetric(delta: f32) -> Self {
        Self {
            l_occupied: delta.abs(),
            l_free: -delta.abs(),
            ..Default::default()
        }
    }

    /// Derive increments from inverse sensor model probabilities.
    ///
    /// `hit_prob` > 0.5 and `miss_prob` < 0.5 give the usual signs.
    pub fn from_probability(hit_prob: f32, miss_prob: f32) -> Self {
        Self {
            l_occupied: super::log_odds::to_log_odds(hit_prob),
            l_free: super::log_odds::to_log_odds(miss_prob),
            ..Default::default()
        }
    }

    /// Terminal increment for a ray with the given hit flag.
    #[inline]
    pub fn terminal(&self, hit: bool) -> f32 {
        if hit { self.l_occupied } else { self.l_free }
    }

    /// Check that increments are finite and thresholds ordered.
    pub fn validate(&self) -> Result<()> {
        if !self.l_occupied.is_finite() || !self.l_free.is_finite() {
            return Err(MapError::InvalidInput(format!(
                "log-odds increments must be finite, got hit={} free={}",
                self.l_occupied, self.l_free
            )));
        }
        if self.free_threshold > self.occupied_threshold {
            return Err(MapError::InvalidInput(format!(
                "free threshold {} above occupied threshold {}",
                self.free_threshold, self.occupied_threshold
            )));
        }
        Ok(())
    }
}

/// Ray tracer limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracerConfig {
    /// Maximum cell steps per ray before giving up.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_max_steps() -> usize {
    100
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

/// Full map configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid dimensions, cell size and frame
    pub grid: GridConfig,
    /// Log-odds update increments
    #[serde(default)]
    pub log_odds: LogOddsConfig,
    /// Tracer limits
    #[serde(default)]
    pub tracer: TracerConfig,
}

impl MapConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.log_odds.validate()
    }
}
