//! Core value types.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`WorldPoint`]: Continuous plane coordinates (meters)
//! - [`HexCell`]: Integer `(col, row)` address of one hexagon
//! - [`Pose2D`]: Position and heading, used for sensor and grid frames
//!
//! ### Sensors
//! - [`Ray`]: Origin, displacement and terminal hit flag
//! - [`SensorSweep`]: Evenly spaced rays from a single pose

mod hex;
mod point;
mod pose;
mod sensors;

pub use hex::{HEX_SIDES, HexCell, normalize_direction};
pub use point::WorldPoint;
pub use pose::{Pose2D, normalize_angle};
pub use sensors::{RangeReading, Ray, SensorSweep};
