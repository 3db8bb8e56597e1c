use grid_util::point::Point;
use nav_grid::{NavGrid, Pathfinder, SearchOutcome};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have an 8-neighborhood.

fn main() {
    let grid = NavGrid::from_fn(3, 3, 0.5, |cell| cell != Point::new(1, 1)).unwrap();
    println!("{}", grid);
    let start = Point::new(0, 2);
    let end = Point::new(2, 0);
    match Pathfinder::new().search(&grid, start, end) {
        SearchOutcome::Found(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        outcome => println!("No path: {:?}", outcome),
    }
}
