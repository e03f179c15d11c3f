//! Occupancy map storage.
//!
//! ## Memory Layout
//!
//! ```text
//! row 0:  [L(0,0) L(1,0) L(2,0) ... L(w-1,0)]
//! row 1:  [L(0,1) L(1,1) L(2,1) ... L(w-1,1)]
//! ...
//! ```
//!
//! One `f32` log-odds per cell, row-major by `(col, row)`. The hex layout
//! only affects geometry, so the storage is a plain rectangle.
//!
//! ## Key Types
//!
//! - [`OccupancyMap`]: Log-odds array with bounds-checked access
//! - [`CellClass`]: Free / occupied / unknown classification
//! - [`CellCounts`]: Statistics for each class

mod core;
mod types;

pub use self::core::OccupancyMap;
pub use types::{CellClass, CellCounts};
