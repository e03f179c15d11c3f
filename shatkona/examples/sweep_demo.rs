//! Build a small hex occupancy map from simulated range sweeps.
//!
//! A robot sits in a rectangular room and takes sweeps from a few poses.
//! Ranges come from intersecting each ray with the room walls. The final
//! map is printed as text, one character per cell.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example sweep_demo
//! ```

use std::f32::consts::TAU;

use shatkona::config::ShatkonaConfig;
use shatkona::{CellClass, HexCell, HexOccupancyMap, Pose2D};

/// Axis-aligned room in world coordinates.
struct Room {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Room {
    /// Distance from `pose` along `angle` to the nearest wall, if within `max_range`.
    fn cast(&self, x: f32, y: f32, angle: f32, max_range: f32) -> Option<f32> {
        let (sin, cos) = angle.sin_cos();
        let mut best = f32::INFINITY;
        if cos > 0.0 {
            best = best.min((self.max_x - x) / cos);
        } else if cos < 0.0 {
            best = best.min((self.min_x - x) / cos);
        }
        if sin > 0.0 {
            best = best.min((self.max_y - y) / sin);
        } else if sin < 0.0 {
            best = best.min((self.min_y - y) / sin);
        }
        (best <= max_range).then_some(best)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ShatkonaConfig::load_default().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        ShatkonaConfig::default()
    });
    config.grid.width = 24;
    config.grid.height = 20;
    config.grid.cell_size = 0.25;
    config.sensor.num_rays = 72;
    config.sensor.max_range = 4.0;
    config.log_odds = shatkona::LogOddsConfig::symmetric(0.4);

    let mut map = match HexOccupancyMap::from_config(&config) {
        Ok(map) => map,
        Err(e) => {
            log::error!("Invalid map configuration: {}", e);
            return;
        }
    };

    let room = Room {
        min_x: 0.6,
        min_y: 0.6,
        max_x: 7.4,
        max_y: 7.3,
    };

    let poses = [
        Pose2D::new(2.0, 2.1, 0.0),
        Pose2D::new(4.1, 4.0, 0.3),
        Pose2D::new(6.0, 6.2, -0.2),
        Pose2D::new(2.3, 6.0, 1.0),
    ];

    for _ in 0..5 {
        for pose in &poses {
            let step = TAU / config.sensor.num_rays as f32;
            let distances: Vec<Option<f32>> = (0..config.sensor.num_rays)
                .map(|i| {
                    let angle = pose.theta + i as f32 * step;
                    room.cast(pose.x, pose.y, angle, config.sensor.max_range)
                })
                .collect();
            let sweep = config.sensor.sweep(*pose, &distances);
            let result = map.observe_sweep(&sweep);
            log::info!(
                "Pose ({:.1}, {:.1}): {} rays, {} failed, {} cell updates",
                pose.x,
                pose.y,
                result.rays_traced,
                result.rays_failed,
                result.cells_updated
            );
        }
    }

    // Top row first; odd columns sit half a row higher
    for row in (0..map.height() as i32).rev() {
        let line: String = (0..map.width() as i32)
            .map(|col| {
                match map
                    .storage()
                    .classify(HexCell::new(col, row), &config.log_odds)
                {
                    Ok(CellClass::Occupied) => '#',
                    Ok(CellClass::Free) => '.',
                    _ => ' ',
                }
            })
            .collect();
        println!("{}", line);
    }

    let stats = map.coverage_stats();
    log::info!(
        "{} free, {} occupied, {} unknown ({:.1} m² explored)",
        stats.free_cells,
        stats.occupied_cells,
        stats.unknown_cells,
        stats.explored_area_m2
    );
}
