//! Test utilities for Shatkona integration tests.
//!
//! Helpers for building maps, center-to-center rays and seeded random rays.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shatkona::{GridConfig, HexCell, HexLayout, HexOccupancyMap, MapConfig, Ray, WorldPoint};

/// Seed shared by the randomized tests.
pub const SEED: u64 = 0x5EED_4E58;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Map with unit cell size and the frame at the world origin.
pub fn unit_map(width: usize, height: usize) -> HexOccupancyMap {
    HexOccupancyMap::new(MapConfig {
        grid: GridConfig::new(width, height, 1.0),
        ..Default::default()
    })
    .unwrap()
}

/// Ray between two cell centers in the map's world frame.
pub fn center_ray(map: &HexOccupancyMap, from: HexCell, to: HexCell, hit: bool) -> Ray {
    Ray::from_endpoints(
        map.layout().cell_center_world(from),
        map.layout().cell_center_world(to),
        hit,
    )
}

/// Whether `point` lies in the closed hexagon of `cell`, up to `tolerance`
/// (grid frame).
pub fn hex_contains(layout: &HexLayout, cell: HexCell, point: WorldPoint, tolerance: f32) -> bool {
    let corners = layout.corners(cell);
    (0..corners.len()).all(|i| {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        let edge = b - a;
        edge.cross(&(point - a)) >= -tolerance * edge.length()
    })
}

/// World-space bounding box of the cell centers of a map.
pub fn center_bounds(layout: &HexLayout, width: usize, height: usize) -> (WorldPoint, WorldPoint) {
    let min = layout.cell_center(HexCell::new(0, 0));
    let max = layout.cell_center(HexCell::new(width as i32 - 1, height as i32 - 1));
    (min, max)
}

/// Deterministic stream of rays with both endpoints inside the center bounds.
pub struct RandomRays {
    rng: StdRng,
    min: WorldPoint,
    max: WorldPoint,
}

impl RandomRays {
    /// Rays whose endpoints lie inside the centers of a `width × height` map.
    pub fn within(layout: &HexLayout, width: usize, height: usize) -> Self {
        let (min, max) = center_bounds(layout, width, height);
        Self {
            rng: StdRng::seed_from_u64(SEED),
            min,
            max,
        }
    }

    fn point(&mut self) -> WorldPoint {
        WorldPoint::new(
            self.rng.random_range(self.min.x..self.max.x),
            self.rng.random_range(self.min.y..self.max.y),
        )
    }
}

impl Iterator for RandomRays {
    type Item = Ray;

    fn next(&mut self) -> Option<Ray> {
        let origin = self.point();
        let mut endpoint = self.point();
        while endpoint.distance(&origin) < 1e-3 {
            endpoint = self.point();
        }
        let hit = self.rng.random_bool(0.5);
        Some(Ray::from_endpoints(origin, endpoint, hit))
    }
}
