//! Hexagonal occupancy grid.
//!
//! This module holds the hex geometry, the log-odds occupancy store and the
//! ray tracer that connects them.
//!
//! ## Architecture
//!
//! ```text
//!            Ray / SensorSweep (world frame)
//!                       │
//!                       ▼
//!             ┌───────────────────┐
//!             │     HexLayout     │  world → grid frame, cell lookup,
//!             │                   │  neighbors and corners
//!             └─────────┬─────────┘
//!                       ▼
//!             ┌───────────────────┐
//!             │     raycaster     │  exit-corner walk, cell by cell
//!             └─────────┬─────────┘
//!                       ▼  TracedRay
//!             ┌───────────────────┐
//!             │    ray_update     │  l_free along the ray,
//!             │                   │  l_occupied / l_free at the end
//!             └─────────┬─────────┘
//!                       ▼
//!        OccupancyUpdate: OccupancyMap | SharedOccupancyMap
//! ```
//!
//! ## Key Components
//!
//! - [`HexLayout`]: Cell centers, containment, neighbors, corners, frame
//! - [`OccupancyMap`]: Dense row-major log-odds array with bounds checks
//! - [`trace_cells`]: Ordered cell sequence for a ray
//! - [`apply_ray`]: Log-odds update of a traced ray
//! - [`SharedOccupancyMap`]: Mutex-guarded map for concurrent tracers
//!
//! ## Log-Odds Model
//!
//! ```text
//! L(x) = ln(P(x) / (1 - P(x)))   # Log-odds conversion
//! L_new = L_old + L_observation    # Bayesian update, unclamped
//!
//! Classification (counts only):
//!   L >  0.85 → Occupied
//!   L < -0.85 → Free
//!   else      → Unknown
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shatkona::core::{HexCell, Ray};
//! use shatkona::grid::{HexLayout, LogOddsConfig, OccupancyMap, TracerConfig};
//! use shatkona::grid::{apply_ray, trace_cells};
//!
//! let layout = HexLayout::new(1.0);
//! let mut map = OccupancyMap::new(5, 5).unwrap();
//!
//! let from = layout.cell_center(HexCell::new(2, 0));
//! let to = layout.cell_center(HexCell::new(2, 3));
//! let traced = trace_cells(
//!     &layout,
//!     &Ray::from_endpoints(from, to, true),
//!     &TracerConfig::default(),
//! )
//! .unwrap();
//! apply_ray(&mut map, &traced, &LogOddsConfig::default()).unwrap();
//!
//! assert!(map.probability_at(HexCell::new(2, 3)).unwrap() > 0.5);
//! ```

mod config;
pub mod layout;
pub mod log_odds;
pub mod ray_update;
pub mod raycaster;
mod shared;
mod storage;
mod traits;

pub use config::{GridConfig, LogOddsConfig, MapConfig, TracerConfig};
pub use layout::HexLayout;
pub use log_odds::{to_log_odds, to_probability};
pub use ray_update::{RayUpdate, apply_ray};
pub use raycaster::{ExitStep, TracedRay, exit_direction, trace_cells};
pub use shared::SharedOccupancyMap;
pub use storage::{CellClass, CellCounts, OccupancyMap};
pub use traits::OccupancyUpdate;
