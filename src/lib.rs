//! # nav_grid
//!
//! Grid-based pathfinding over a world-anchored navigation surface. A
//! [NavGrid] discretizes a rectangular world extent into uniform cells and
//! freezes each cell's walkability at construction; a [Pathfinder] runs
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! 8-connected cells, using an [IndexedHeap] as its open set and an integer
//! diagonal-distance heuristic, then reduces found paths to the waypoints at
//! which the direction of travel changes. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use nav_grid::{NavGrid, Pathfinder, WorldPos};
//!
//! // A 10x10 world with one blocked spot near the middle.
//! let grid = NavGrid::new(WorldPos::new(10.0, 0.0, 10.0), 0.5, |pos| {
//!     !(pos.x.abs() < 1.0 && pos.z.abs() < 1.0)
//! })
//! .unwrap();
//! let mut pathfinder = Pathfinder::new();
//! let result = pathfinder.find_path(
//!     &grid,
//!     WorldPos::new(-4.5, 0.0, -4.5),
//!     WorldPos::new(4.5, 0.0, 4.5),
//! );
//! assert!(result.success);
//! ```

mod error;
mod heap;
mod nav_grid;
mod search;
mod simplify;

pub use error::GridError;
pub use heap::{HeapItem, IndexedHeap};
pub use nav_grid::{BoundsPolicy, NavGrid, Node, WorldPos};
pub use search::{heuristic, path_cost, step_cost, PathResult, Pathfinder, SearchOutcome};
pub use simplify::{simplify, simplify_cells, waypoints_to_cells};

/// Cost of a cardinal step between adjacent cells.
pub const C: i32 = 10;
/// Cost of a diagonal step; an integer approximation of sqrt(2) times [C],
/// kept integral so heuristic arithmetic is exact.
pub const D: i32 = 14;
/// Derived constant used by the closed-form diagonal distance.
pub const E: i32 = 2 * C - D;
