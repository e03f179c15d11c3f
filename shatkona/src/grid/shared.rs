//! Thread-safe occupancy map handle.
//!
//! Several tracers can feed one map by each holding a clone of the handle.
//! The lock is taken once per `accumulate`, never for a whole ray, so
//! updates from concurrent rays interleave at cell granularity. Log-odds
//! addition commutes, so the final map does not depend on the interleaving.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::HexCell;
use crate::error::{MapError, Result};
use crate::grid::OccupancyMap;
use crate::grid::traits::OccupancyUpdate;

/// Shared handle to an [`OccupancyMap`] (Arc<Mutex<OccupancyMap>>).
#[derive(Clone, Debug)]
pub struct SharedOccupancyMap {
    inner: Arc<Mutex<OccupancyMap>>,
    // Fixed at construction; kept outside the lock for bounds checks.
    width: usize,
    height: usize,
}

impl SharedOccupancyMap {
    /// Wrap an existing map.
    pub fn new(map: OccupancyMap) -> Self {
        let (width, height) = (map.width(), map.height());
        Self {
            inner: Arc::new(Mutex::new(map)),
            width,
            height,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, OccupancyMap>> {
        self.inner.lock().map_err(|_| MapError::LockPoisoned)
    }

    /// Run `f` with the map locked.
    pub fn with_map<R>(&self, f: impl FnOnce(&OccupancyMap) -> R) -> Result<R> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Copy of the current map contents.
    pub fn snapshot(&self) -> Result<OccupancyMap> {
        self.with_map(OccupancyMap::clone)
    }

    /// Log-odds of a single cell.
    pub fn log_odds(&self, cell: HexCell) -> Result<f32> {
        self.lock()?.log_odds(cell)
    }

    /// Unwrap the map if this is the last handle.
    ///
    /// Returns the handle back when other clones are still alive.
    pub fn try_unwrap(self) -> std::result::Result<Result<OccupancyMap>, Self> {
        let (width, height) = (self.width, self.height);
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().map_err(|_| MapError::LockPoisoned)),
            Err(inner) => Err(Self {
                inner,
                width,
                height,
            }),
        }
    }
}

impl OccupancyUpdate for SharedOccupancyMap {
    #[inline]
    fn contains(&self, cell: HexCell) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn accumulate(&mut self, cell: HexCell, delta: f32) -> Result<()> {
        self.lock()?.accumulate(cell, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::config::{LogOddsConfig, TracerConfig};
    use crate::grid::layout::HexLayout;
    use crate::grid::ray_update::apply_ray;
    use crate::grid::raycaster::trace_cells;
    use crate::core::Ray;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn test_accumulate_through_handle() {
        let mut shared = SharedOccupancyMap::new(OccupancyMap::new(4, 4).unwrap());
        shared.accumulate(HexCell::new(1, 1), 0.5).unwrap();
        assert_eq!(shared.log_odds(HexCell::new(1, 1)).unwrap(), 0.5);
        assert!(matches!(
            shared.accumulate(HexCell::new(4, 0), 0.5),
            Err(MapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_bounds_match_map() {
        let map = OccupancyMap::new(3, 5).unwrap();
        let shared = SharedOccupancyMap::new(map.clone());
        for col in -1..5 {
            for row in -1..7 {
                let cell = HexCell::new(col, row);
                assert_eq!(shared.contains(cell), map.contains(cell), "{}", cell);
            }
        }
        assert_eq!(shared.dimensions(), (3, 5));
    }

    #[test]
    fn test_concurrent_rays() {
        let layout = HexLayout::new(1.0);
        let shared = SharedOccupancyMap::new(OccupancyMap::new(10, 10).unwrap());
        let start = HexCell::new(4, 1);
        let end = HexCell::new(4, 8);
        let ray = Ray::from_endpoints(layout.cell_center(start), layout.cell_center(end), true);
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();

        let threads = 4;
        let rays_per_thread = 25;
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let mut sink = shared.clone();
                let traced = traced.clone();
                thread::spawn(move || {
                    for _ in 0..rays_per_thread {
                        apply_ray(&mut sink, &traced, &LogOddsConfig::default()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let total = (threads * rays_per_thread) as f32;
        let map = shared.snapshot().unwrap();
        assert_relative_eq!(map.log_odds(start).unwrap(), -0.01 * total, epsilon = 1e-4);
        assert_relative_eq!(map.log_odds(end).unwrap(), 0.01 * total, epsilon = 1e-4);
    }

    #[test]
    fn test_poisoned_lock() {
        let shared = SharedOccupancyMap::new(OccupancyMap::new(2, 2).unwrap());
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let mut sink = shared.clone();
        assert_eq!(
            sink.accumulate(HexCell::new(0, 0), 1.0),
            Err(MapError::LockPoisoned)
        );
        assert_eq!(shared.snapshot(), Err(MapError::LockPoisoned));
    }

    #[test]
    fn test_try_unwrap() {
        let shared = SharedOccupancyMap::new(OccupancyMap::new(2, 2).unwrap());
        let other = shared.clone();
        let shared = shared.try_unwrap().unwrap_err();
        drop(other);
        let map = shared.try_unwrap().unwrap().unwrap();
        assert_eq!(map.width(), 2);
    }
}
