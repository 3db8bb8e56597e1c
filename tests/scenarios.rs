//! End-to-end contract scenarios: world-space requests against small grids
//! with known answers.

use grid_util::point::Point;
use nav_grid::{path_cost, BoundsPolicy, NavGrid, Pathfinder, SearchOutcome, WorldPos};

/// A 5x5 grid with unit cells; cell (x, z) has its center at
/// (x - 2, 0, z - 2).
fn five_by_five(blocked: &[(i32, i32)]) -> NavGrid {
    NavGrid::from_fn(5, 5, 0.5, |cell| !blocked.contains(&(cell.x, cell.y))).unwrap()
}

#[test]
fn open_grid_diagonal_costs_fifty_six_and_keeps_one_waypoint() {
    let grid = five_by_five(&[]);
    let mut pathfinder = Pathfinder::new();

    let cells = match pathfinder.search(&grid, Point::new(0, 0), Point::new(4, 4)) {
        SearchOutcome::Found(cells) => cells,
        outcome => panic!("expected a path, got {:?}", outcome),
    };
    assert_eq!(path_cost(&cells), 4 * 14);

    let start = grid.cell_center(Point::new(0, 0));
    let target = grid.cell_center(Point::new(4, 4));
    let result = pathfinder.find_path(&grid, start, target);
    assert!(result.success);
    // One direction throughout, so the target is the only waypoint.
    assert_eq!(result.waypoints, vec![target]);
}

#[test]
fn wall_with_single_gap_is_routed_through() {
    // Column 2 is solid except for the gap at row 4.
    let grid = five_by_five(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
    let mut pathfinder = Pathfinder::new();

    let cells = match pathfinder.search(&grid, Point::new(0, 0), Point::new(4, 0)) {
        SearchOutcome::Found(cells) => cells,
        outcome => panic!("expected a path, got {:?}", outcome),
    };
    assert!(cells.contains(&Point::new(2, 4)));
    assert!(path_cost(&cells) > 4 * 14);

    let result = pathfinder.find_path(
        &grid,
        grid.cell_center(Point::new(0, 0)),
        grid.cell_center(Point::new(4, 0)),
    );
    assert!(result.success);
    assert!(!result.waypoints.is_empty());
}

#[test]
fn unwalkable_target_fails_as_data() {
    let grid = five_by_five(&[(4, 4)]);
    let mut pathfinder = Pathfinder::new();
    let result = pathfinder.find_path(
        &grid,
        grid.cell_center(Point::new(0, 0)),
        grid.cell_center(Point::new(4, 4)),
    );
    assert!(!result.success);
    assert!(result.waypoints.is_empty());
}

#[test]
fn start_equals_target_returns_just_the_target() {
    let grid = five_by_five(&[]);
    let mut pathfinder = Pathfinder::new();
    let spot = grid.cell_center(Point::new(1, 3));
    let result = pathfinder.find_path(&grid, spot, spot);
    assert!(result.success);
    assert_eq!(result.waypoints, vec![spot]);
}

#[test]
fn fully_enclosed_target_fails() {
    // The target corner is sealed off by its three neighbors.
    let grid = five_by_five(&[(3, 3), (3, 4), (4, 3)]);
    let mut pathfinder = Pathfinder::new();
    let result = pathfinder.find_path(
        &grid,
        grid.cell_center(Point::new(0, 0)),
        grid.cell_center(Point::new(4, 4)),
    );
    assert!(!result.success);
    assert!(result.waypoints.is_empty());
}

#[test]
fn identical_requests_are_deterministic() {
    let grid = five_by_five(&[(1, 1), (2, 3), (3, 1)]);
    let start = grid.cell_center(Point::new(0, 0));
    let target = grid.cell_center(Point::new(4, 4));

    let mut pathfinder = Pathfinder::new();
    let first = pathfinder.find_path(&grid, start, target);
    let second = pathfinder.find_path(&grid, start, target);
    assert!(first.success);
    assert_eq!(first, second);

    let other = Pathfinder::new().find_path(&grid, start, target);
    assert_eq!(first, other);
}

#[test]
fn out_of_extent_requests_follow_the_bounds_policy() {
    let mut grid = five_by_five(&[]);
    let mut pathfinder = Pathfinder::new();
    let start = grid.cell_center(Point::new(0, 0));
    let beyond = WorldPos::new(50.0, 0.0, 50.0);

    // Clamping snaps the request to the nearest edge cell.
    let clamped = pathfinder.find_path(&grid, start, beyond);
    assert!(clamped.success);
    assert_eq!(
        clamped.waypoints.last(),
        Some(&grid.cell_center(Point::new(4, 4)))
    );

    grid.bounds_policy = BoundsPolicy::Reject;
    let rejected = pathfinder.find_path(&grid, start, beyond);
    assert!(!rejected.success);
    assert!(rejected.waypoints.is_empty());
}
