//! Types used by map storage.

use crate::grid::LogOddsConfig;
use serde::{Deserialize, Serialize};

/// Threshold classification of a cell's log-odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// Between the thresholds (includes never observed).
    Unknown,
    /// Below the free threshold.
    Free,
    /// Above the occupied threshold.
    Occupied,
}

impl CellClass {
    /// Classify a log-odds value. NaN is treated as unknown.
    #[inline]
    pub fn from_log_odds(log_odds: f32, config: &LogOddsConfig) -> Self {
        if log_odds > config.occupied_threshold {
            CellClass::Occupied
        } else if log_odds < config.free_threshold {
            CellClass::Free
        } else {
            CellClass::Unknown
        }
    }
}

/// Cell counts by class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Cells between the thresholds.
    pub unknown: usize,
    /// Cells classified free.
    pub free: usize,
    /// Cells classified occupied.
    pub occupied: usize,
}

impl CellCounts {
    /// Total classified (non-unknown) cells.
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}
