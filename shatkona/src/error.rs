//! Error types for Shatkona

use thiserror::Error;

use crate::core::HexCell;

/// Map and tracing error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Cell address outside `[0, width) x [0, height)`
    #[error("Cell {cell} out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// Offending cell
        cell: HexCell,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// The exit-corner walk found every corner on one side of the ray
    #[error("Degenerate geometry at cell {cell}: no exit corner after {tests} corner tests")]
    DegenerateGeometry {
        /// Cell being exited
        cell: HexCell,
        /// Corner tests performed
        tests: usize,
    },

    /// The cell-stepping loop did not reach the end cell
    #[error("Ray from {start} did not reach {end} within {steps} steps")]
    IterationLimitExceeded {
        /// Steps taken
        steps: usize,
        /// Start cell
        start: HexCell,
        /// Resolved end cell
        end: HexCell,
    },

    /// Malformed ray or map parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A thread panicked while holding the shared map
    #[error("Shared map lock poisoned")]
    LockPoisoned,
}

/// Result alias for map operations
pub type Result<T> = std::result::Result<T, MapError>;
