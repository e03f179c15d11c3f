//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::grid::GridConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Number of columns
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Number of rows
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// Hexagon circumradius (meters)
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// World X of the center of cell (0, 0)
    #[serde(default)]
    pub origin_x: f32,

    /// World Y of the center of cell (0, 0)
    #[serde(default)]
    pub origin_y: f32,

    /// Grid frame rotation (radians, CCW)
    #[serde(default)]
    pub rotation: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: defaults::grid_size(),
            height: defaults::grid_size(),
            cell_size: defaults::cell_size(),
            origin_x: 0.0,
            origin_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height, self.cell_size).with_frame(
            WorldPoint::new(self.origin_x, self.origin_y),
            self.rotation,
        )
    }
}
