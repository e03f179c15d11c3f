//! # Shatkona
//!
//! Probabilistic occupancy mapping on a hexagonal grid.
//!
//! ## Overview
//!
//! The map is a `width × height` block of flat-topped hexagons in an offset
//! column layout. Each cell stores the log-odds of being occupied. Range
//! sensor rays are traced cell by cell across the tessellation, and every
//! traversed cell receives one Bayesian update:
//!
//! - **pass-through cells**: `l_free` (evidence of free space)
//! - **terminal cell**: `l_occupied` if the ray hit an obstacle, else `l_free`
//!
//! ## Quick Start
//!
//! ```rust
//! use shatkona::{HexOccupancyMap, MapConfig, Pose2D, SensorSweep};
//!
//! let mut map = HexOccupancyMap::new(MapConfig::default()).unwrap();
//!
//! // Twelve rays from the middle of the grid, all hitting at 1.9m
//! let center = map.layout().cell_center(shatkona::HexCell::new(10, 10));
//! let pose = Pose2D::new(center.x, center.y, 0.0);
//! let sweep = SensorSweep::from_readings(pose, 10.0, &[(1.9, true); 12]);
//! let result = map.observe_sweep(&sweep);
//!
//! assert_eq!(result.rays_traced, 12);
//! ```
//!
//! ## Coordinate System
//!
//! - X: right, Y: up, angles CCW positive from +X
//! - The grid frame is placed in the world by a [`Pose2D`]; cell `(0, 0)` is
//!   centered at the frame origin
//! - Cell size is the hexagon circumradius

#![warn(missing_docs)]

// Core types
pub mod core;

// Hex geometry, storage and ray tracing
pub mod grid;

// YAML configuration
pub mod config;

// Error taxonomy
pub mod error;

pub use crate::core::{HexCell, Pose2D, RangeReading, Ray, SensorSweep, WorldPoint};

pub use config::{ConfigLoadError, ShatkonaConfig};
pub use error::{MapError, Result};
pub use grid::{
    CellClass, CellCounts, GridConfig, HexLayout, LogOddsConfig, MapConfig, OccupancyMap,
    OccupancyUpdate, RayUpdate, SharedOccupancyMap, TracedRay, TracerConfig,
};

/// Result of processing a sensor sweep
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepResult {
    /// Rays traced and applied
    pub rays_traced: usize,
    /// Rays skipped because tracing or updating failed
    pub rays_failed: usize,
    /// Total cell updates applied
    pub cells_updated: usize,
    /// Applied rays whose terminal cell received the occupied increment
    pub hits_applied: usize,
}

impl SweepResult {
    /// Merge another result into this one
    pub fn merge(&mut self, other: &SweepResult) {
        self.rays_traced += other.rays_traced;
        self.rays_failed += other.rays_failed;
        self.cells_updated += other.cells_updated;
        self.hits_applied += other.hits_applied;
    }
}

/// Map coverage statistics (classification breakdown)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapCoverageStats {
    /// Cells classified free or occupied
    pub known_cells: usize,
    /// Cells below the free threshold
    pub free_cells: usize,
    /// Cells above the occupied threshold
    pub occupied_cells: usize,
    /// Cells between the thresholds
    pub unknown_cells: usize,
    /// Area of the known cells (m²)
    pub explored_area_m2: f32,
}

impl From<CellCounts> for MapCoverageStats {
    fn from(counts: CellCounts) -> Self {
        Self {
            known_cells: counts.known(),
            free_cells: counts.free,
            occupied_cells: counts.occupied,
            unknown_cells: counts.unknown,
            explored_area_m2: 0.0,
        }
    }
}

/// The hex occupancy map session.
///
/// Owns the layout and the storage. This is the primary type for feeding
/// sensor rays into the map and reading occupancy back out.
#[derive(Clone, Debug)]
pub struct HexOccupancyMap {
    layout: HexLayout,
    storage: OccupancyMap,
    config: MapConfig,
}

impl HexOccupancyMap {
    /// Create a map with every cell at probability 0.5.
    pub fn new(config: MapConfig) -> Result<Self> {
        config.validate()?;
        let layout = HexLayout::with_frame(config.grid.cell_size, config.grid.frame);
        let storage = OccupancyMap::new(config.grid.width, config.grid.height)?;

        log::debug!(
            "Created {}x{} hex map, cell size {:.3}m, frame {:?}",
            config.grid.width,
            config.grid.height,
            config.grid.cell_size,
            config.grid.frame
        );

        Ok(Self {
            layout,
            storage,
            config,
        })
    }

    /// Create a map from a loaded configuration file.
    pub fn from_config(config: &ShatkonaConfig) -> Result<Self> {
        Self::new(config.to_map_config())
    }

    // === Accessors ===

    /// Hex geometry (cell size and grid frame)
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Log-odds storage
    pub fn storage(&self) -> &OccupancyMap {
        &self.storage
    }

    /// Mutable log-odds storage
    pub fn storage_mut(&mut self) -> &mut OccupancyMap {
        &mut self.storage
    }

    /// Configuration the map was created with
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.storage.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.storage.height()
    }

    /// Hexagon circumradius in meters
    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size()
    }

    /// Occupancy probability of `cell`
    pub fn probability_at(&self, cell: HexCell) -> Result<f32> {
        self.storage.probability_at(cell)
    }

    /// Log-odds of `cell`
    pub fn log_odds(&self, cell: HexCell) -> Result<f32> {
        self.storage.log_odds(cell)
    }

    /// Cell containing a world point, if it is inside the map
    pub fn cell_at(&self, point: WorldPoint) -> Option<HexCell> {
        let cell = self.layout.cell_from_world(point);
        self.storage.contains(cell).then_some(cell)
    }

    /// Get map coverage statistics
    pub fn coverage_stats(&self) -> MapCoverageStats {
        let counts = self.storage.counts(&self.config.log_odds);
        let s = self.cell_size();
        let cell_area = 1.5 * 3.0_f32.sqrt() * s * s;

        let mut stats = MapCoverageStats::from(counts);
        stats.explored_area_m2 = counts.known() as f32 * cell_area;
        stats
    }

    /// Reset every cell to probability 0.5
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    // =========================================================================
    // SENSOR OBSERVATION METHODS
    // =========================================================================

    /// Cells crossed by a world-frame ray, without updating the map.
    pub fn trace(&self, ray: &Ray) -> Result<TracedRay> {
        ray.validate()?;
        let local = self.layout.ray_to_local(ray);
        grid::trace_cells(&self.layout, &local, &self.config.tracer)
    }

    /// Trace a world-frame ray and apply its log-odds updates.
    ///
    /// On error the map is left unchanged.
    pub fn observe_ray(&mut self, ray: &Ray) -> Result<RayUpdate> {
        let traced = self.trace(ray)?;
        log::trace!(
            "Ray {} -> {}: {} cells, hit={}",
            traced.start(),
            traced.end(),
            traced.len(),
            ray.hit
        );
        grid::apply_ray(&mut self.storage, &traced, &self.config.log_odds)
    }

    /// Apply every ray of a sweep.
    ///
    /// A ray that fails is skipped and counted in `rays_failed`; the
    /// remaining rays are still applied.
    pub fn observe_sweep(&mut self, sweep: &SensorSweep) -> SweepResult {
        let mut result = SweepResult::default();

        for (i, ray) in sweep.rays().enumerate() {
            match self.observe_ray(&ray) {
                Ok(update) => {
                    result.rays_traced += 1;
                    result.cells_updated += update.cells_updated;
                    if update.hit {
                        result.hits_applied += 1;
                    }
                }
                Err(e) => {
                    log::warn!("Skipping ray {} of sweep at {:?}: {}", i, sweep.pose, e);
                    result.rays_failed += 1;
                }
            }
        }

        log::debug!(
            "Sweep: {} rays traced, {} failed, {} cells updated",
            result.rays_traced,
            result.rays_failed,
            result.cells_updated
        );
        result
    }

    /// Apply a ray to a shared map using this map's layout and increments.
    ///
    /// The tracing runs without any lock; only the per-cell updates go
    /// through `sink`.
    pub fn observe_ray_into<S: OccupancyUpdate + ?Sized>(
        &self,
        sink: &mut S,
        ray: &Ray,
    ) -> Result<RayUpdate> {
        let traced = self.trace(ray)?;
        grid::apply_ray(sink, &traced, &self.config.log_odds)
    }
}
