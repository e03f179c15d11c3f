//! Occupancy map storage.
//!
//! Dense row-major array of `f32` log-odds, one per cell.

use crate::core::HexCell;
use crate::error::{MapError, Result};
use crate::grid::LogOddsConfig;
use crate::grid::log_odds::to_probability;

use super::types::{CellClass, CellCounts};

/// Log-odds occupancy values for a `width x height` block of hex cells.
///
/// Cell `(col, row)` is stored at `row * width + col`. Every accessor checks
/// bounds and reports [`MapError::OutOfBounds`] rather than dropping the
/// access, so each traversed cell is guaranteed its update.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMap {
    log_odds: Vec<f32>,
    width: usize,
    height: usize,
}

impl OccupancyMap {
    /// Allocate a map with every cell at log-odds 0 (probability 0.5).
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidInput(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            log_odds: vec![0.0; width * height],
            width,
            height,
        })
    }

    // === Basic Properties ===

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.log_odds.len()
    }

    /// Whether `cell` lies inside the map.
    #[inline]
    pub fn contains(&self, cell: HexCell) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    /// Flat index of `cell`, or an out-of-bounds error.
    #[inline]
    pub fn index_of(&self, cell: HexCell) -> Result<usize> {
        if self.contains(cell) {
            Ok(cell.row as usize * self.width + cell.col as usize)
        } else {
            Err(self.out_of_bounds(cell))
        }
    }

    /// Cell stored at flat index `index`.
    #[inline]
    pub fn cell_at_index(&self, index: usize) -> HexCell {
        HexCell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    fn out_of_bounds(&self, cell: HexCell) -> MapError {
        MapError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        }
    }

    // === Cell Access ===

    /// Current log-odds of `cell`.
    #[inline]
    pub fn log_odds(&self, cell: HexCell) -> Result<f32> {
        self.index_of(cell).map(|i| self.log_odds[i])
    }

    /// Occupancy probability of `cell`.
    #[inline]
    pub fn probability_at(&self, cell: HexCell) -> Result<f32> {
        self.log_odds(cell).map(to_probability)
    }

    /// Overwrite the log-odds of `cell`.
    ///
    /// Used to seed regions known to be occupied or free.
    #[inline]
    pub fn set(&mut self, cell: HexCell, log_odds: f32) -> Result<()> {
        let i = self.index_of(cell)?;
        self.log_odds[i] = log_odds;
        Ok(())
    }

    /// Add `delta` to the log-odds of `cell` (Bayesian update, no clamping).
    #[inline]
    pub fn accumulate(&mut self, cell: HexCell, delta: f32) -> Result<()> {
        let i = self.index_of(cell)?;
        self.log_odds[i] += delta;
        Ok(())
    }

    /// Classify `cell` against the thresholds in `config`.
    pub fn classify(&self, cell: HexCell, config: &LogOddsConfig) -> Result<CellClass> {
        self.log_odds(cell).map(|l| CellClass::from_log_odds(l, config))
    }

    /// Reset every cell to log-odds 0.
    pub fn clear(&mut self) {
        self.log_odds.fill(0.0);
    }

    // === Iterators ===

    /// Iterate over all cells with their log-odds, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (HexCell, f32)> + '_ {
        self.log_odds
            .iter()
            .enumerate()
            .map(move |(i, &l)| (self.cell_at_index(i), l))
    }

    /// Raw log-odds slice in storage order.
    #[inline]
    pub fn log_odds_raw(&self) -> &[f32] {
        &self.log_odds
    }

    /// Count cells in each class.
    pub fn counts(&self, config: &LogOddsConfig) -> CellCounts {
        let mut counts = CellCounts::default();
        for &l in &self.log_odds {
            match CellClass::from_log_odds(l, config) {
                CellClass::Unknown => counts.unknown += 1,
                CellClass::Free => counts.free += 1,
                CellClass::Occupied => counts.occupied += 1,
            }
        }
        counts
    }
}
