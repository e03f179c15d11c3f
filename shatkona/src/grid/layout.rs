//! Hex layout: continuous geometry of the offset-column grid.
//!
//! Flat-topped hexagons with circumradius `s`. Columns are `1.5·s` apart and
//! rows are `√3·s` apart. Odd columns are shifted up by half a row:
//!
//! ```text
//! center(c, r) = (1.5·s·c, √3·s·(r + ½·(c mod 2)))
//! ```
//!
//! Corner `i` lies between neighbor directions `i` and `i + 1`, at
//! `120° + 60°·i` from the center. Corners 1 and 4 are the left and right
//! tips:
//!
//! ```text
//!          0 _______ 5
//!           /       \
//!        1 /    ●    \ 4
//!          \         /
//!           \_______/
//!          2         3
//! ```
//!
//! Only the tips are computed from a cell's own center. The other four
//! corners are the tip of a neighboring cell, so every corner point has a
//! single owner. Two cells sharing a corner therefore get bit-identical
//! coordinates for it.
//!
//! All geometry here is in the grid's local frame. [`HexLayout::to_local`]
//! and [`HexLayout::to_world`] convert through the frame pose.

use crate::core::{HEX_SIDES, HexCell, Pose2D, Ray, WorldPoint, normalize_direction};

const SQRT_3: f32 = 1.732_050_8;

/// Geometry of a hex grid: cell size plus the pose of the grid frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    cell_size: f32,
    frame: Pose2D,
}

impl HexLayout {
    /// Layout with the grid frame at the world origin.
    pub fn new(cell_size: f32) -> Self {
        Self::with_frame(cell_size, Pose2D::identity())
    }

    /// Layout with the grid frame at `frame`.
    pub fn with_frame(cell_size: f32, frame: Pose2D) -> Self {
        Self { cell_size, frame }
    }

    /// Hexagon circumradius (center to corner).
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Pose of the grid frame in the world.
    #[inline]
    pub fn frame(&self) -> Pose2D {
        self.frame
    }

    /// Horizontal distance between adjacent column centers.
    #[inline]
    pub fn column_spacing(&self) -> f32 {
        1.5 * self.cell_size
    }

    /// Vertical distance between adjacent row centers in one column.
    #[inline]
    pub fn row_spacing(&self) -> f32 {
        SQRT_3 * self.cell_size
    }

    // === Cell <-> point ===

    /// Center of a cell in the grid frame.
    #[inline]
    pub fn cell_center(&self, cell: HexCell) -> WorldPoint {
        let shift = if cell.is_odd_column() { 0.5 } else { 0.0 };
        WorldPoint::new(
            self.column_spacing() * cell.col as f32,
            self.row_spacing() * (cell.row as f32 + shift),
        )
    }

    /// The cell whose hexagon contains `point` (grid frame).
    ///
    /// Fractional axial coordinates are rounded in cube space, which picks
    /// the nearest center under the hex metric, i.e. the containing hexagon.
    pub fn cell_from_point(&self, point: WorldPoint) -> HexCell {
        let q = point.x / self.column_spacing();
        let r = point.y / self.row_spacing() - q * 0.5;
        let (q, r) = cube_round(q, r);
        HexCell::from_axial(q, r)
    }

    // === Topology and corners ===

    /// Neighbor of `cell` in direction `i` (mod 6).
    #[inline]
    pub fn neighbor(&self, cell: HexCell, i: i32) -> HexCell {
        cell.neighbor(i)
    }

    /// Corner `i` (mod 6) of `cell` in the grid frame.
    pub fn corner(&self, cell: HexCell, i: i32) -> WorldPoint {
        match normalize_direction(i) {
            0 => self.tip(cell.neighbor(1), 4),
            1 => self.tip(cell, 1),
            2 => self.tip(cell.neighbor(2), 4),
            3 => self.tip(cell.neighbor(4), 1),
            4 => self.tip(cell, 4),
            _ => self.tip(cell.neighbor(5), 1),
        }
    }

    /// All six corners of `cell`, indexed by corner number.
    pub fn corners(&self, cell: HexCell) -> [WorldPoint; HEX_SIDES] {
        std::array::from_fn(|i| self.corner(cell, i as i32))
    }

    /// Left (1) or right (4) tip, computed from the cell's own center.
    #[inline]
    fn tip(&self, cell: HexCell, which: usize) -> WorldPoint {
        let center = self.cell_center(cell);
        if which == 1 {
            WorldPoint::new(center.x - self.cell_size, center.y)
        } else {
            WorldPoint::new(center.x + self.cell_size, center.y)
        }
    }

    // === Frame conversion ===

    /// World point to grid frame.
    #[inline]
    pub fn to_local(&self, point: WorldPoint) -> WorldPoint {
        self.frame.inverse_transform_point(point)
    }

    /// Grid frame point to world.
    #[inline]
    pub fn to_world(&self, point: WorldPoint) -> WorldPoint {
        self.frame.transform_point(point)
    }

    /// World-frame ray to grid frame. The direction is only rotated.
    pub fn ray_to_local(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.to_local(ray.origin),
            self.frame.inverse_transform_vector(ray.direction),
            ray.hit,
        )
    }

    /// Cell containing a world-frame point.
    #[inline]
    pub fn cell_from_world(&self, point: WorldPoint) -> HexCell {
        self.cell_from_point(self.to_local(point))
    }

    /// World-frame center of a cell.
    #[inline]
    pub fn cell_center_world(&self, cell: HexCell) -> WorldPoint {
        self.to_world(self.cell_center(cell))
    }
}

/// Round fractional axial coordinates to the nearest hex.
fn cube_round(q: f32, r: f32) -> (i32, i32) {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    (rq as i32, rr as i32)
}
