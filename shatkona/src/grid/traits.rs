//! Update sink abstraction.
//!
//! Ray updates only need bounds checks and additive log-odds writes, so
//! they target this trait instead of a concrete storage. Both the plain
//! [`OccupancyMap`] and the lock-guarded
//! [`SharedOccupancyMap`](crate::grid::SharedOccupancyMap) implement it.

use crate::core::HexCell;
use crate::error::Result;
use crate::grid::OccupancyMap;

/// Target for log-odds updates.
///
/// # Example
///
/// ```ignore
/// use shatkona::grid::{OccupancyUpdate, TracedRay, LogOddsConfig, apply_ray};
///
/// fn integrate<S: OccupancyUpdate>(sink: &mut S, traced: &TracedRay) {
///     if let Err(e) = apply_ray(sink, traced, &LogOddsConfig::default()) {
///         log::warn!("ray dropped: {}", e);
///     }
/// }
/// ```
pub trait OccupancyUpdate {
    /// Whether `cell` can receive updates.
    fn contains(&self, cell: HexCell) -> bool;

    /// `(width, height)` in cells.
    fn dimensions(&self) -> (usize, usize);

    /// Add `delta` to the log-odds of `cell`.
    fn accumulate(&mut self, cell: HexCell, delta: f32) -> Result<()>;
}

impl OccupancyUpdate for OccupancyMap {
    #[inline]
    fn contains(&self, cell: HexCell) -> bool {
        OccupancyMap::contains(self, cell)
    }

    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    #[inline]
    fn accumulate(&mut self, cell: HexCell, delta: f32) -> Result<()> {
        OccupancyMap::accumulate(self, cell, delta)
    }
}
