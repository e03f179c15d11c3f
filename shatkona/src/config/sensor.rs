//! Sensor configuration section.

use serde::{Deserialize, Serialize};

use crate::core::{Pose2D, SensorSweep};

use super::defaults;

/// Range sensor settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorSection {
    /// Rays per sweep, evenly spaced over a full turn
    #[serde(default = "defaults::num_rays")]
    pub num_rays: usize,

    /// Maximum sensing range (meters)
    #[serde(default = "defaults::max_range")]
    pub max_range: f32,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            num_rays: defaults::num_rays(),
            max_range: defaults::max_range(),
        }
    }
}

impl SensorSection {
    /// Build a sweep at `pose` from per-ray hit distances.
    ///
    /// `None` is a miss and is recorded at `max_range`. Readings beyond
    /// `num_rays` are ignored; missing ones count as misses.
    pub fn sweep(&self, pose: Pose2D, distances: &[Option<f32>]) -> SensorSweep {
        let mut sweep = SensorSweep::new(pose, self.max_range);
        for i in 0..self.num_rays {
            match distances.get(i).copied().flatten() {
                Some(d) => sweep.push_hit(d),
                None => sweep.push_miss(),
            }
        }
        sweep
    }
}
