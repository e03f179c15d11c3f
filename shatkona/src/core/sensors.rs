//! Sensor input types: single rays and full sweeps.
//!
//! The hit distance and flag come from an external ray-intersection query.
//! This module only carries the results to the map.
//!
//! ## Sweep Layout
//!
//! ```text
//!                heading (ray 0)
//!                    ↑
//!          ray n-1 ╲ │ ╱ ray 1
//!                   ╲│╱
//!            ───────(●)───────
//!                   ╱│╲
//!                  ╱ │ ╲
//! ```
//!
//! Ray `i` of an `n`-ray sweep points at `heading + i * 2π / n`.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;
use super::pose::Pose2D;
use crate::error::{MapError, Result};

/// One sensor ray: origin, direction and terminal hit flag.
///
/// The direction is not normalized. Its length is the distance travelled,
/// so `origin + direction` is the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point
    pub origin: WorldPoint,
    /// Displacement from origin to endpoint
    pub direction: WorldPoint,
    /// Did the ray stop on an obstacle?
    pub hit: bool,
}

impl Ray {
    /// Create a ray from origin and displacement.
    pub fn new(origin: WorldPoint, direction: WorldPoint, hit: bool) -> Self {
        Self {
            origin,
            direction,
            hit,
        }
    }

    /// Create a ray between two explicit points.
    pub fn from_endpoints(origin: WorldPoint, endpoint: WorldPoint, hit: bool) -> Self {
        Self::new(origin, endpoint - origin, hit)
    }

    /// Create a ray from a heading angle (radians, CCW from +X) and range.
    pub fn from_polar(origin: WorldPoint, angle: f32, range: f32, hit: bool) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(origin, WorldPoint::new(cos * range, sin * range), hit)
    }

    /// Point where the ray stops.
    #[inline]
    pub fn endpoint(&self) -> WorldPoint {
        self.origin + self.direction
    }

    /// Length of the ray.
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction.length()
    }

    /// Reject rays the tracer cannot walk.
    ///
    /// Non-finite coordinates and zero-length directions are caller errors.
    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() {
            return Err(MapError::InvalidInput(format!(
                "ray origin is not finite: {:?}",
                self.origin
            )));
        }
        if !self.direction.is_finite() {
            return Err(MapError::InvalidInput(format!(
                "ray direction is not finite: {:?}",
                self.direction
            )));
        }
        if self.direction.x == 0.0 && self.direction.y == 0.0 {
            return Err(MapError::InvalidInput(
                "ray direction has zero length".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one ray-intersection query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeReading {
    /// Distance travelled (hit distance, or max range on a miss)
    pub distance: f32,
    /// Did the query report an obstacle?
    pub hit: bool,
}

/// A set of evenly spaced rays taken from one pose in one sensing step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SensorSweep {
    /// Sensor pose in the world frame; theta is the heading of ray 0.
    pub pose: Pose2D,
    /// Maximum sensing range in meters.
    pub max_range: f32,
    /// One reading per ray, in angular order.
    pub readings: Vec<RangeReading>,
}

impl SensorSweep {
    /// Create an empty sweep.
    pub fn new(pose: Pose2D, max_range: f32) -> Self {
        Self {
            pose,
            max_range,
            readings: Vec::new(),
        }
    }

    /// Create a sweep from `(distance, hit)` pairs.
    pub fn from_readings(pose: Pose2D, max_range: f32, readings: &[(f32, bool)]) -> Self {
        Self {
            pose,
            max_range,
            readings: readings
                .iter()
                .map(|&(distance, hit)| RangeReading { distance, hit })
                .collect(),
        }
    }

    /// Record a ray that stopped on an obstacle at `distance`.
    pub fn push_hit(&mut self, distance: f32) {
        self.readings.push(RangeReading {
            distance: distance.min(self.max_range),
            hit: true,
        });
    }

    /// Record a ray that reached max range without a hit.
    pub fn push_miss(&mut self) {
        self.readings.push(RangeReading {
            distance: self.max_range,
            hit: false,
        });
    }

    /// Number of rays
    #[inline]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Is the sweep empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Heading of ray `i` in the world frame.
    #[inline]
    pub fn ray_angle(&self, i: usize) -> f32 {
        self.pose.theta + i as f32 * TAU / self.readings.len() as f32
    }

    /// World-frame rays in angular order.
    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        let origin = self.pose.position();
        self.readings
            .iter()
            .enumerate()
            .map(move |(i, r)| Ray::from_polar(origin, self.ray_angle(i), r.distance, r.hit))
    }

    /// Number of readings that hit an obstacle.
    pub fn hit_count(&self) -> usize {
        self.readings.iter().filter(|r| r.hit).count()
    }
}
