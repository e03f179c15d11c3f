//! 2D pose type for sensor and grid frames.
//!
//! Right-handed frame, counter-clockwise positive rotation.

use super::point::WorldPoint;
use serde::{Deserialize, Serialize};

/// Normalize an angle to [-π, π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a >= PI { a - TAU } else { a }
}

/// A 2D pose: position and heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians [-π, π), CCW positive from X-axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose (theta is normalized).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Identity pose (origin, facing +X).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Position as a point.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Forward unit vector.
    #[inline]
    pub fn forward(self) -> WorldPoint {
        WorldPoint::new(self.theta.cos(), self.theta.sin())
    }

    /// Transform a point from this pose's local frame to world frame.
    #[inline]
    pub fn transform_point(self, point: WorldPoint) -> WorldPoint {
        self.position() + self.transform_vector(point)
    }

    /// Transform a point from world frame to this pose's local frame.
    #[inline]
    pub fn inverse_transform_point(self, point: WorldPoint) -> WorldPoint {
        self.inverse_transform_vector(point - self.position())
    }

    /// Rotate a free vector from local to world frame (no translation).
    #[inline]
    pub fn transform_vector(self, v: WorldPoint) -> WorldPoint {
        v.rotate(self.theta)
    }

    /// Rotate a free vector from world to local frame (no translation).
    #[inline]
    pub fn inverse_transform_vector(self, v: WorldPoint) -> WorldPoint {
        v.rotate(-self.theta)
    }

    /// Both position and heading are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}
