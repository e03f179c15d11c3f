//! Ray update for the occupancy map.
//!
//! Applies one traced ray to an update sink using log-odds Bayesian updates:
//! - Cells the ray passed through receive `l_free` (evidence of free space)
//! - The terminal cell receives `l_occupied` on a hit, `l_free` otherwise
//!
//! Each cell of the sequence is updated exactly once.

use crate::core::HexCell;
use crate::error::{MapError, Result};
use crate::grid::config::LogOddsConfig;
use crate::grid::raycaster::TracedRay;
use crate::grid::traits::OccupancyUpdate;

/// Summary of one applied ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayUpdate {
    /// Number of cells that received an increment.
    pub cells_updated: usize,
    /// Cell that received the terminal increment.
    pub terminal: HexCell,
    /// Whether the terminal increment was `l_occupied`.
    pub hit: bool,
}

/// Apply a traced ray to `sink`, using its `hit` flag for the terminal cell.
///
/// Every cell is bounds-checked before the first write, so an error leaves
/// the sink untouched (except for sinks that fail mid-write, such as a
/// poisoned shared map).
pub fn apply_ray<S: OccupancyUpdate + ?Sized>(
    sink: &mut S,
    traced: &TracedRay,
    config: &LogOddsConfig,
) -> Result<RayUpdate> {
    if traced.is_empty() {
        return Err(MapError::InvalidInput(
            "traced ray has no cells".to_string(),
        ));
    }

    if let Some(&cell) = traced.cells.iter().find(|&&c| !sink.contains(c)) {
        let (width, height) = sink.dimensions();
        return Err(MapError::OutOfBounds {
            cell,
            width,
            height,
        });
    }

    for &cell in traced.pass_through() {
        sink.accumulate(cell, config.l_free)?;
    }

    let terminal = traced.end();
    sink.accumulate(terminal, config.terminal(traced.hit))?;

    Ok(RayUpdate {
        cells_updated: traced.len(),
        terminal,
        hit: traced.hit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OccupancyMap;
    use approx::assert_relative_eq;

    fn traced(cells: &[(i32, i32)], hit: bool) -> TracedRay {
        TracedRay {
            cells: cells.iter().map(|&(c, r)| HexCell::new(c, r)).collect(),
            hit,
            boundary_steps: 0,
        }
    }

    #[test]
    fn test_hit_updates() {
        let mut map = OccupancyMap::new(5, 5).unwrap();
        let ray = traced(&[(2, 0), (2, 1), (2, 2)], true);
        let update = apply_ray(&mut map, &ray, &LogOddsConfig::default()).unwrap();

        assert_eq!(update.cells_updated, 3);
        assert_eq!(update.terminal, HexCell::new(2, 2));
        assert!(update.hit);
        assert_relative_eq!(map.log_odds(HexCell::new(2, 0)).unwrap(), -0.01);
        assert_relative_eq!(map.log_odds(HexCell::new(2, 1)).unwrap(), -0.01);
        assert_relative_eq!(map.log_odds(HexCell::new(2, 2)).unwrap(), 0.01);
    }

    #[test]
    fn test_miss_updates() {
        let mut map = OccupancyMap::new(5, 5).unwrap();
        let ray = traced(&[(2, 0), (2, 1), (2, 2)], false);
        apply_ray(&mut map, &ray, &LogOddsConfig::default()).unwrap();

        for (_, l) in map.iter().filter(|&(_, l)| l != 0.0) {
            assert_relative_eq!(l, -0.01);
        }
        assert_relative_eq!(map.log_odds(HexCell::new(2, 2)).unwrap(), -0.01);
    }

    #[test]
    fn test_single_cell_gets_terminal_only() {
        let mut map = OccupancyMap::new(3, 3).unwrap();
        let ray = traced(&[(1, 1)], true);
        let update = apply_ray(&mut map, &ray, &LogOddsConfig::default()).unwrap();
        assert_eq!(update.cells_updated, 1);
        assert_relative_eq!(map.log_odds(HexCell::new(1, 1)).unwrap(), 0.01);
    }

    #[test]
    fn test_out_of_bounds_leaves_map_untouched() {
        let mut map = OccupancyMap::new(3, 3).unwrap();
        let ray = traced(&[(1, 1), (1, 2), (1, 3)], true);
        let err = apply_ray(&mut map, &ray, &LogOddsConfig::default()).unwrap_err();
        assert_eq!(
            err,
            MapError::OutOfBounds {
                cell: HexCell::new(1, 3),
                width: 3,
                height: 3,
            }
        );
        assert!(map.iter().all(|(_, l)| l == 0.0));
    }

    #[test]
    fn test_custom_increments() {
        let mut map = OccupancyMap::new(4, 4).unwrap();
        let config = LogOddsConfig::symmetric(0.4);
        let ray = traced(&[(0, 0), (1, 0)], true);
        apply_ray(&mut map, &ray, &config).unwrap();
        apply_ray(&mut map, &ray, &config).unwrap();
        assert_relative_eq!(map.log_odds(HexCell::new(0, 0)).unwrap(), -0.8);
        assert_relative_eq!(map.log_odds(HexCell::new(1, 0)).unwrap(), 0.8);
    }
}
