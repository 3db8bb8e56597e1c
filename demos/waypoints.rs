use grid_util::point::Point;
use nav_grid::{simplify_cells, waypoints_to_cells, NavGrid, Pathfinder, SearchOutcome};

/// This example illustrates the relation between a full cell path and its
/// simplified waypoints. A path is found on a 5x5 grid with shape
/// S
///  #
///
///
///     E
/// where
/// - S marks the start
/// - E marks the end
///
/// The searched path is reduced to the cells where the direction of travel
/// changes, and then expanded back step by step.
fn main() {
    let grid = NavGrid::from_fn(5, 5, 0.5, |cell| cell != Point::new(1, 1)).unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    if let SearchOutcome::Found(path) = Pathfinder::new().search(&grid, start, end) {
        println!("Full path:");
        for p in &path {
            println!("{:?}", p);
        }
        let mut waypoints = vec![path[0]];
        waypoints.extend(simplify_cells(&path));
        println!("Waypoints:");
        for p in &waypoints {
            println!("{:?}", p);
        }
        println!("Re-expanded:");
        for p in waypoints_to_cells(&waypoints) {
            println!("{:?}", p);
        }
    }
}
