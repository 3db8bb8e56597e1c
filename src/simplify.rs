//! Collapsing stepwise cell paths into direction-change waypoints, and
//! expanding waypoints back into steps.

use grid_util::point::Point;

use crate::nav_grid::{NavGrid, WorldPos};

/// Reduces a start-to-target cell path to the cells at which the direction
/// of travel changes, plus the target itself. Single pass; a straight run
/// keeps only its endpoint, so an unobstructed diagonal collapses to the
/// target alone. The start is not emitted (the caller is already there).
pub fn simplify_cells(cells: &[Point]) -> Vec<Point> {
    let mut waypoints = Vec::new();
    let Some(&last) = cells.last() else {
        return waypoints;
    };
    for window in cells.windows(3) {
        let before = window[0].dir(&window[1]);
        let after = window[1].dir(&window[2]);
        if before != after {
            waypoints.push(window[1]);
        }
    }
    waypoints.push(last);
    waypoints
}

/// [simplify_cells], mapped to world positions through the grid.
pub fn simplify(grid: &NavGrid, cells: &[Point]) -> Vec<WorldPos> {
    simplify_cells(cells)
        .into_iter()
        .map(|cell| grid.cell_center(cell))
        .collect()
}

/// Expands consecutive waypoints back into a stepwise cell path. Due to
/// grid symmetry this is generally one of several step sequences following
/// the waypoints; for the output of [simplify_cells] (prepended with the
/// start cell) it reconstructs the original path exactly, since every
/// waypoint pair spans a straight run.
pub fn waypoints_to_cells(waypoints: &[Point]) -> Vec<Point> {
    let mut path = Vec::new();
    let Some((&first, rest)) = waypoints.split_first() else {
        return path;
    };
    let mut current = first;
    path.push(current);
    for next in rest {
        while current.move_distance(next) >= 1 {
            let delta = current.dir(next);
            current = current + delta;
            path.push(current);
        }
    }
    path
}
