//! Offset hex cell addressing.
//!
//! Cells are addressed by `(col, row)` in a shifted-column layout: odd
//! columns sit half a cell higher than even columns. Direction indices run
//! around the cell starting at north:
//!
//! ```text
//!             0 (row + 1)
//!         ___________
//!    1   /           \   5
//!       /             \
//!       \             /
//!    2   \___________/   4
//!
//!             3 (row - 1)
//! ```
//!
//! Directions 1 and 2 step to the lower column, 4 and 5 to the higher one.
//! Which row they land on depends on the parity of the current column.

use serde::{Deserialize, Serialize};

/// Number of neighbors (and corners) of a hex cell.
pub const HEX_SIDES: usize = 6;

/// `(col, row)` deltas for directions 0..6 from an even column.
const EVEN_COLUMN_OFFSETS: [(i32, i32); HEX_SIDES] =
    [(0, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0)];

/// Same as [`EVEN_COLUMN_OFFSETS`] for an odd column.
const ODD_COLUMN_OFFSETS: [(i32, i32); HEX_SIDES] =
    [(0, 1), (-1, 1), (-1, 0), (0, -1), (1, 0), (1, 1)];

/// Normalize any direction or corner index into `[0, 6)`.
///
/// Negative indices wrap, so `-1` is `5`.
#[inline]
pub fn normalize_direction(i: i32) -> usize {
    ((i % 6) + 6) as usize % HEX_SIDES
}

/// One hexagon in the offset-column grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexCell {
    /// Column index
    pub col: i32,
    /// Row index
    pub row: i32,
}

impl HexCell {
    /// Create a new cell address
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True for columns shifted half a cell up.
    #[inline]
    pub fn is_odd_column(&self) -> bool {
        self.col & 1 == 1
    }

    /// The neighbor in direction `i` (taken modulo 6).
    #[inline]
    pub fn neighbor(&self, i: i32) -> HexCell {
        let offsets = if self.is_odd_column() {
            &ODD_COLUMN_OFFSETS
        } else {
            &EVEN_COLUMN_OFFSETS
        };
        let (dc, dr) = offsets[normalize_direction(i)];
        HexCell::new(self.col + dc, self.row + dr)
    }

    /// All six neighbors, indexed by direction.
    pub fn neighbors(&self) -> [HexCell; HEX_SIDES] {
        std::array::from_fn(|i| self.neighbor(i as i32))
    }

    /// Direction index from `self` to `other`, if they share an edge.
    pub fn direction_to(&self, other: &HexCell) -> Option<usize> {
        self.neighbors().iter().position(|n| n == other)
    }

    /// Whether the two cells share an edge.
    #[inline]
    pub fn is_adjacent(&self, other: &HexCell) -> bool {
        self.direction_to(other).is_some()
    }

    /// Whether the cell lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.col >= 0
            && self.row >= 0
            && (self.col as usize) < width
            && (self.row as usize) < height
    }

    /// Axial coordinates `(q, r)` of this cell.
    ///
    /// `q` equals the column; `r` removes the column shift.
    #[inline]
    pub fn to_axial(&self) -> (i32, i32) {
        (self.col, self.row - self.col.div_euclid(2))
    }

    /// Inverse of [`to_axial`](Self::to_axial).
    #[inline]
    pub fn from_axial(q: i32, r: i32) -> Self {
        Self::new(q, r + q.div_euclid(2))
    }

    /// Number of cell steps between two cells.
    pub fn distance(&self, other: &HexCell) -> u32 {
        let (q1, r1) = self.to_axial();
        let (q2, r2) = other.to_axial();
        let dq = q1 - q2;
        let dr = r1 - r2;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }
}

impl std::fmt::Display for HexCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
