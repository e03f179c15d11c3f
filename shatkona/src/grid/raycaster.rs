//! Cell-stepping ray traversal across the hex grid.
//!
//! A ray is walked cell by cell from the cell containing its origin to the
//! cell containing its endpoint. At each cell the tracer finds the edge the
//! ray line leaves through and steps into the neighbor across it.
//!
//! ## Exit Corner Walk
//!
//! Corners are classified by the sign of `cross(direction, corner - origin)`:
//! positive means left of the ray. Going around the cell in corner order,
//! the exit edge is the one running from a non-left corner `k` to a left
//! corner `k + 1`, and its neighbor direction is `k + 1`.
//!
//! ```text
//!                 left of ray
//!            0 _______ 5
//!             /       \   ←── exit edge (4 → 5), next = neighbor(5)
//!   ─────── 1/    ●    \4 ─────────────→  ray
//!             \       /
//!            2 \_______/ 3
//!                right of ray
//! ```
//!
//! The walk starts from the previous step's exit direction instead of
//! scanning all six corners:
//!
//! - start corner left of the ray: walk downward until a corner is not
//!   left at index `i`; next cell is `neighbor(i + 1)`
//! - start corner not left: walk upward until a corner is left at index
//!   `i`; next cell is `neighbor(i)`
//!
//! The walk is capped at six corner tests. A corner exactly on the ray line
//! (cross product 0) counts as not-left.
//!
//! ## Vertex Rays
//!
//! A ray that starts or ends on a vertex may resolve to a cell the line only
//! touches. If all six tests come back not-left and some corner was exactly
//! on the line, the touching corners are recounted as left and the walk
//! steps off the touching edge or corner. Traversal stops once the exit
//! point lies past the ray's endpoint, so an endpoint on a vertex ends in
//! one of the cells sharing that vertex.

use crate::core::{HEX_SIDES, HexCell, Ray, WorldPoint, normalize_direction};
use crate::error::{MapError, Result};
use crate::grid::config::TracerConfig;
use crate::grid::layout::HexLayout;

/// Maximum corner tests in one exit walk.
pub const MAX_CORNER_TESTS: usize = HEX_SIDES;

/// Seed direction for the first exit walk of a ray.
pub const INITIAL_EXIT_DIRECTION: usize = 0;

/// Slack past the endpoint, as a fraction of the cell size, before the
/// walk stops short of the rounded end cell.
pub const END_SLACK: f32 = 1e-3;

/// Result of one exit walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitStep {
    /// Neighbor direction the ray leaves through (seed for the next walk).
    pub direction: usize,
    /// Cell across the exit edge.
    pub next: HexCell,
    /// Where the ray line crosses the exit edge.
    pub exit_point: WorldPoint,
    /// Corner tests performed.
    pub corner_tests: usize,
    /// A corner lay exactly on the ray line.
    pub on_boundary: bool,
}

/// Find where the ray line leaves `cell`.
///
/// `seed` is the exit direction of the previous step (or
/// [`INITIAL_EXIT_DIRECTION`]). `ray` must be in the grid frame.
///
/// # Errors
/// [`MapError::DegenerateGeometry`] when the line misses the cell entirely.
pub fn exit_direction(
    layout: &HexLayout,
    cell: HexCell,
    ray: &Ray,
    seed: usize,
) -> Result<ExitStep> {
    let mut sides = [0.0f32; HEX_SIDES];
    let mut k = seed as i32;
    let first = corner_side(layout, cell, ray, k);
    sides[normalize_direction(k)] = first;
    let mut on_boundary = first == 0.0;
    let descending = first > 0.0;
    let mut tests = 1;

    while tests < MAX_CORNER_TESTS {
        k = if descending { k - 1 } else { k + 1 };
        let s = corner_side(layout, cell, ray, k);
        sides[normalize_direction(k)] = s;
        on_boundary |= s == 0.0;
        tests += 1;

        let exit = if descending && s <= 0.0 {
            Some(normalize_direction(k + 1))
        } else if !descending && s > 0.0 {
            Some(normalize_direction(k))
        } else {
            None
        };

        if let Some(direction) = exit {
            if on_boundary {
                log::trace!(
                    "Ray grazes a corner of cell {}, exiting through direction {}",
                    cell,
                    direction
                );
            }
            return Ok(exit_step(layout, cell, direction, &sides, tests, on_boundary));
        }
    }

    // Every corner is right of or on the line: the line only touches the
    // cell. Leave through the edge ending at the first touching corner.
    if on_boundary {
        let touching = (0..HEX_SIDES)
            .find(|&j| sides[(j + HEX_SIDES - 1) % HEX_SIDES] < 0.0 && sides[j] == 0.0);
        if let Some(direction) = touching {
            log::trace!(
                "Ray touches cell {} without entering it, stepping through direction {}",
                cell,
                direction
            );
            return Ok(exit_step(layout, cell, direction, &sides, tests, true));
        }
    }

    Err(MapError::DegenerateGeometry { cell, tests })
}

/// Build the step for exit edge `direction`, which runs from corner
/// `direction - 1` (not left) to corner `direction`.
fn exit_step(
    layout: &HexLayout,
    cell: HexCell,
    direction: usize,
    sides: &[f32; HEX_SIDES],
    corner_tests: usize,
    on_boundary: bool,
) -> ExitStep {
    let from = (direction + HEX_SIDES - 1) % HEX_SIDES;
    let a = layout.corner(cell, from as i32);
    let b = layout.corner(cell, direction as i32);
    let (sa, sb) = (sides[from], sides[direction]);
    let exit_point = if sa == 0.0 {
        a
    } else if sb == 0.0 {
        b
    } else {
        a + (b - a) * (sa / (sa - sb))
    };
    ExitStep {
        direction,
        next: cell.neighbor(direction as i32),
        exit_point,
        corner_tests,
        on_boundary,
    }
}

/// Signed side of corner `k` relative to the ray line. Positive is left.
#[inline]
fn corner_side(layout: &HexLayout, cell: HexCell, ray: &Ray, k: i32) -> f32 {
    ray.direction.cross(&(layout.corner(cell, k) - ray.origin))
}

/// Ordered cells crossed by one ray.
#[derive(Clone, Debug, PartialEq)]
pub struct TracedRay {
    /// Cells from start to end inclusive, each adjacent to the next.
    pub cells: Vec<HexCell>,
    /// Terminal hit flag carried from the input ray.
    pub hit: bool,
    /// Number of steps where the ray grazed a corner.
    pub boundary_steps: usize,
}

impl TracedRay {
    /// Cell containing the ray origin.
    #[inline]
    pub fn start(&self) -> HexCell {
        self.cells[0]
    }

    /// Cell containing the ray endpoint.
    #[inline]
    pub fn end(&self) -> HexCell {
        self.cells[self.cells.len() - 1]
    }

    /// Cells before the terminal one (receive the free-space update).
    #[inline]
    pub fn pass_through(&self) -> &[HexCell] {
        &self.cells[..self.cells.len() - 1]
    }

    /// Number of cells in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a traced ray holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Walk `ray` (grid frame) from its start cell to its end cell.
///
/// The walk stops at the rounded end cell, or earlier if it leaves a cell
/// beyond the endpoint. The second case only happens when the endpoint is
/// on a cell boundary.
///
/// # Errors
/// - [`MapError::InvalidInput`] for a zero-length or non-finite ray
/// - [`MapError::DegenerateGeometry`] if an exit walk finds no sign flip
/// - [`MapError::IterationLimitExceeded`] after `config.max_steps` steps
pub fn trace_cells(layout: &HexLayout, ray: &Ray, config: &TracerConfig) -> Result<TracedRay> {
    ray.validate()?;

    let start = layout.cell_from_point(ray.origin);
    let end = layout.cell_from_point(ray.endpoint());

    let length_sq = ray.direction.dot(&ray.direction);
    let slack = END_SLACK * layout.cell_size() / length_sq.sqrt();

    let mut cells = vec![start];
    let mut current = start;
    let mut seed = INITIAL_EXIT_DIRECTION;
    let mut boundary_steps = 0;
    let mut steps = 0;

    while current != end {
        if steps >= config.max_steps {
            return Err(MapError::IterationLimitExceeded { steps, start, end });
        }
        let step = exit_direction(layout, current, ray, seed)?;
        // Fraction of the ray covered at the exit point
        let t = (step.exit_point - ray.origin).dot(&ray.direction) / length_sq;
        if t > 1.0 + slack {
            log::trace!(
                "Ray ends on the boundary of cell {} (rounded end {})",
                current,
                end
            );
            break;
        }
        if step.on_boundary {
            boundary_steps += 1;
        }
        seed = step.direction;
        current = step.next;
        cells.push(current);
        steps += 1;
    }

    Ok(TracedRay {
        cells,
        hit: ray.hit,
        boundary_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HexLayout {
        HexLayout::new(1.0)
    }

    fn center_ray(layout: &HexLayout, from: HexCell, to: HexCell) -> Ray {
        Ray::from_endpoints(layout.cell_center(from), layout.cell_center(to), true)
    }

    #[test]
    fn test_exit_north() {
        let layout = layout();
        let cell = HexCell::new(2, 2);
        let ray = center_ray(&layout, cell, HexCell::new(2, 5));
        let step = exit_direction(&layout, cell, &ray, 0).unwrap();
        assert_eq!(step.direction, 0);
        assert_eq!(step.next, HexCell::new(2, 3));
        assert!(step.corner_tests <= MAX_CORNER_TESTS);
        assert!(!step.on_boundary);
    }

    #[test]
    fn test_exit_matches_neighbor_for_every_seed() {
        // Aim at each neighbor's center: any seed must find that neighbor
        let layout = layout();
        for cell in [HexCell::new(2, 2), HexCell::new(3, 2)] {
            for dir in 0..6 {
                let target = cell.neighbor(dir);
                let ray = center_ray(&layout, cell, target);
                for seed in 0..6 {
                    let step = exit_direction(&layout, cell, &ray, seed).unwrap();
                    assert_eq!(step.next, target, "cell {} dir {} seed {}", cell, dir, seed);
                    assert_eq!(step.direction, dir as usize);
                }
            }
        }
    }

    #[test]
    fn test_exit_walk_direction_rule() {
        let layout = layout();
        let cell = HexCell::new(0, 0);
        // Ray heading +X slightly above the center
        let ray = Ray::new(WorldPoint::new(0.0, 0.1), WorldPoint::new(5.0, 0.0), true);

        // Seed 5: corner 5 is left, walk down to corner 4 (right) -> neighbor(5)
        let down = exit_direction(&layout, cell, &ray, 5).unwrap();
        assert_eq!(down.direction, 5);
        assert_eq!(down.corner_tests, 2);

        // Seed 3: corner 3 is right, walk up to corner 5 (left) -> neighbor(5)
        let up = exit_direction(&layout, cell, &ray, 3).unwrap();
        assert_eq!(up.direction, 5);
        assert_eq!(up.corner_tests, 3);
    }

    #[test]
    fn test_exit_degenerate_when_line_misses_cell() {
        let layout = layout();
        // Line y = 10 never touches cell (0, 0): every corner is on one side
        let ray = Ray::new(WorldPoint::new(0.0, 10.0), WorldPoint::new(1.0, 0.0), true);
        let err = exit_direction(&layout, HexCell::new(0, 0), &ray, 0).unwrap_err();
        assert_eq!(
            err,
            MapError::DegenerateGeometry {
                cell: HexCell::new(0, 0),
                tests: MAX_CORNER_TESTS
            }
        );
    }

    #[test]
    fn test_exit_through_corner_is_flagged() {
        let layout = layout();
        // Along the x axis through both tips of cell (0, 0)
        let ray = Ray::new(WorldPoint::ZERO, WorldPoint::new(6.0, 0.0), true);
        let step = exit_direction(&layout, HexCell::new(0, 0), &ray, 0).unwrap();
        assert!(step.on_boundary);
        assert_eq!(step.direction, 5);
    }

    #[test]
    fn test_exit_from_touching_corner() {
        // Heading south from the right tip: the cell lies right of the line
        let layout = layout();
        let cell = HexCell::new(0, 0);
        let ray = Ray::new(WorldPoint::new(1.0, 0.0), WorldPoint::new(0.0, -2.0), true);
        let step = exit_direction(&layout, cell, &ray, 0).unwrap();
        assert_eq!(step.direction, 4);
        assert_eq!(step.next, cell.neighbor(4));
        assert_eq!(step.exit_point, layout.corner(cell, 4));
        assert_eq!(step.corner_tests, MAX_CORNER_TESTS);
        assert!(step.on_boundary);
    }

    #[test]
    fn test_exit_from_touching_edge() {
        // Heading east along the top edge
        let layout = layout();
        let cell = HexCell::new(0, 0);
        let ray = Ray::new(layout.corner(cell, 0), WorldPoint::new(2.0, 0.0), true);
        let step = exit_direction(&layout, cell, &ray, 0).unwrap();
        assert_eq!(step.direction, 5);
        assert_eq!(step.next, cell.neighbor(5));
        assert_eq!(step.exit_point, layout.corner(cell, 5));
        assert!(step.on_boundary);
    }

    #[test]
    fn test_exit_point_on_edge() {
        let layout = layout();
        let cell = HexCell::new(2, 2);
        let ray = center_ray(&layout, cell, HexCell::new(2, 5));
        let step = exit_direction(&layout, cell, &ray, 0).unwrap();
        let center = layout.cell_center(cell);
        assert!((step.exit_point.x - center.x).abs() < 1e-5);
        assert!((step.exit_point.y - (center.y + layout.row_spacing() * 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_trace_from_vertex() {
        let layout = HexLayout::new(0.5);
        let cell = HexCell::new(6, 6);
        let ray = Ray::new(layout.corner(cell, 4), WorldPoint::new(0.0, -0.5), true);
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();
        assert_eq!(traced.end(), cell.neighbor(4));
        for pair in traced.cells.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
    }

    #[test]
    fn test_trace_straight_north() {
        let layout = layout();
        let ray = center_ray(&layout, HexCell::new(2, 0), HexCell::new(2, 4));
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();
        assert_eq!(
            traced.cells,
            vec![
                HexCell::new(2, 0),
                HexCell::new(2, 1),
                HexCell::new(2, 2),
                HexCell::new(2, 3),
                HexCell::new(2, 4),
            ]
        );
        assert_eq!(traced.start(), HexCell::new(2, 0));
        assert_eq!(traced.end(), HexCell::new(2, 4));
        assert_eq!(traced.pass_through().len(), 4);
        assert!(traced.hit);
    }

    #[test]
    fn test_trace_south_west() {
        let layout = layout();
        let start = HexCell::new(6, 6);
        let mut expected = vec![start];
        for _ in 0..4 {
            let next = expected[expected.len() - 1].neighbor(2);
            expected.push(next);
        }
        let ray = center_ray(&layout, start, expected[4]);
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();
        assert_eq!(traced.cells, expected);
    }

    #[test]
    fn test_trace_along_edges() {
        // Along the x axis the ray grazes cell edges; it must still arrive
        let layout = layout();
        let ray = Ray::new(WorldPoint::new(0.0, 0.0), WorldPoint::new(9.0, 0.0), false);
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();
        assert_eq!(traced.start(), HexCell::new(0, 0));
        assert_eq!(traced.end(), HexCell::new(6, 0));
        assert_eq!(traced.len(), 7);
        assert!(traced.boundary_steps > 0);
        for pair in traced.cells.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
    }

    #[test]
    fn test_trace_single_cell() {
        let layout = layout();
        let ray = Ray::new(WorldPoint::new(0.1, 0.1), WorldPoint::new(0.2, 0.0), true);
        let traced = trace_cells(&layout, &ray, &TracerConfig::default()).unwrap();
        assert_eq!(traced.cells, vec![HexCell::new(0, 0)]);
        assert!(traced.pass_through().is_empty());
    }

    #[test]
    fn test_trace_rejects_zero_direction() {
        let layout = layout();
        let ray = Ray::new(WorldPoint::new(0.1, 0.1), WorldPoint::ZERO, true);
        assert!(matches!(
            trace_cells(&layout, &ray, &TracerConfig::default()),
            Err(MapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_trace_iteration_limit() {
        let layout = layout();
        let ray = center_ray(&layout, HexCell::new(0, 0), HexCell::new(0, 10));
        let config = TracerConfig { max_steps: 5 };
        let err = trace_cells(&layout, &ray, &config).unwrap_err();
        assert_eq!(
            err,
            MapError::IterationLimitExceeded {
                steps: 5,
                start: HexCell::new(0, 0),
                end: HexCell::new(0, 10),
            }
        );
    }
}
