//! The navigation grid: a rectangular world extent discretized into uniform
//! cells with frozen walkability, plus the world/cell coordinate mapping and
//! the connected components used for constant-time unreachability checks.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::GridError;

/// A position in world space.
///
/// The navigation plane is x/z; grid cell coordinates map world x to cell x
/// and world z to cell y. The y component is carried through unchanged and
/// never affects discretization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32, z: f32) -> WorldPos {
        WorldPos { x, y, z }
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// How [NavGrid::world_to_cell] treats positions outside the world extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Saturate to the nearest edge cell.
    #[default]
    Clamp,
    /// Report the position as unresolvable instead of snapping it.
    Reject,
}

/// One cell of the grid as a value: discrete coordinates, world-space
/// center and frozen walkability. Search bookkeeping deliberately does not
/// live here; it sits in per-search scratch so the grid stays read-only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub cell: Point,
    pub position: WorldPos,
    pub walkable: bool,
}

/// A world-anchored grid of walkable/blocked cells.
///
/// Built once from a world extent, a cell radius and a walkability
/// predicate; immutable afterwards. The extent is centered on the world
/// origin. Connected components over the walkable cells are generated at
/// construction (the grid never changes, so they never go stale) and let
/// [unreachable](NavGrid::unreachable) answer without a search.
#[derive(Clone, Debug)]
pub struct NavGrid {
    blocked: BoolGrid,
    components: UnionFind<usize>,
    extent_x: f32,
    extent_z: f32,
    diameter: f32,
    radius: f32,
    pub bounds_policy: BoundsPolicy,
}

impl NavGrid {
    /// Builds the grid by discretizing `extent` into cells of diameter
    /// `2 * cell_radius` and querying `is_walkable` exactly once per cell
    /// with that cell's world-space center.
    ///
    /// Dimensions are the extent divided by the diameter, rounded to the
    /// nearest integer. A non-positive radius or an extent that rounds to
    /// zero cells on either axis is a configuration error.
    pub fn new(
        extent: WorldPos,
        cell_radius: f32,
        mut is_walkable: impl FnMut(WorldPos) -> bool,
    ) -> Result<NavGrid, GridError> {
        if cell_radius <= 0.0 {
            return Err(GridError::NonPositiveRadius(cell_radius));
        }
        let diameter = cell_radius * 2.0;
        let size_x = (extent.x / diameter).round() as usize;
        let size_z = (extent.z / diameter).round() as usize;
        if size_x == 0 || size_z == 0 {
            return Err(GridError::Degenerate {
                extent_x: extent.x,
                extent_z: extent.z,
                diameter,
                size_x,
                size_z,
            });
        }

        let mut grid = NavGrid {
            blocked: BoolGrid::new(size_x, size_z, false),
            components: UnionFind::new(size_x * size_z),
            extent_x: extent.x,
            extent_z: extent.z,
            diameter,
            radius: cell_radius,
            bounds_policy: BoundsPolicy::default(),
        };
        for x in 0..size_x {
            for z in 0..size_z {
                let cell = Point::new(x as i32, z as i32);
                let walkable = is_walkable(grid.cell_center(cell));
                grid.blocked.set(x, z, !walkable);
            }
        }
        grid.generate_components();
        info!(
            "built {}x{} navigation grid ({} cells, diameter {})",
            size_x,
            size_z,
            size_x * size_z,
            diameter
        );
        Ok(grid)
    }

    /// Builds a grid directly from cell coordinates, with the extent
    /// synthesized as `size * diameter` centered on the origin. Convenient
    /// when walkability is already known per cell rather than per world
    /// position.
    pub fn from_fn(
        size_x: usize,
        size_z: usize,
        cell_radius: f32,
        mut is_walkable: impl FnMut(Point) -> bool,
    ) -> Result<NavGrid, GridError> {
        let diameter = cell_radius * 2.0;
        let extent = WorldPos::new(size_x as f32 * diameter, 0.0, size_z as f32 * diameter);
        NavGrid::new(extent, cell_radius, |pos| {
            // Centers land exactly on half-cell offsets here, so the
            // inverse mapping below is exact.
            let x = ((pos.x + size_x as f32 * cell_radius) / diameter).floor() as i32;
            let z = ((pos.z + size_z as f32 * cell_radius) / diameter).floor() as i32;
            is_walkable(Point::new(x, z))
        })
    }

    pub fn size_x(&self) -> usize {
        self.blocked.width
    }

    pub fn size_z(&self) -> usize {
        self.blocked.height
    }

    /// Total number of cells; the capacity bound for search scratch.
    pub fn cell_count(&self) -> usize {
        self.blocked.width * self.blocked.height
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self
                .blocked
                .index_in_bounds(cell.x as usize, cell.y as usize)
    }

    pub fn walkable(&self, cell: Point) -> bool {
        self.in_bounds(cell) && !self.blocked.get(cell.x as usize, cell.y as usize)
    }

    /// The world-space center of a cell: bottom-left corner of the extent
    /// plus the cell offset in diameters plus one radius per axis.
    pub fn cell_center(&self, cell: Point) -> WorldPos {
        WorldPos::new(
            cell.x as f32 * self.diameter + self.radius - self.extent_x * 0.5,
            0.0,
            cell.y as f32 * self.diameter + self.radius - self.extent_z * 0.5,
        )
    }

    /// The cell as a value entity.
    pub fn node(&self, cell: Point) -> Node {
        Node {
            cell,
            position: self.cell_center(cell),
            walkable: self.walkable(cell),
        }
    }

    /// Resolves a world position to the cell containing it.
    ///
    /// Under [BoundsPolicy::Clamp] (the default) out-of-extent positions
    /// saturate to the nearest edge cell, so this always returns [Some];
    /// callers must not rely on it to detect out-of-extent queries. Under
    /// [BoundsPolicy::Reject] they resolve to [None] instead.
    pub fn world_to_cell(&self, pos: WorldPos) -> Option<Point> {
        // Fractional position within the extent; 0.5 because the extent is
        // centered on the origin.
        let frac_x = pos.x / self.extent_x + 0.5;
        let frac_z = pos.z / self.extent_z + 0.5;
        if self.bounds_policy == BoundsPolicy::Reject
            && !((0.0..=1.0).contains(&frac_x) && (0.0..=1.0).contains(&frac_z))
        {
            return None;
        }
        let x = (self.size_x() as f32 * frac_x.clamp(0.0, 1.0)) as usize;
        let z = (self.size_z() as f32 * frac_z.clamp(0.0, 1.0)) as usize;
        Some(Point::new(
            x.min(self.size_x() - 1) as i32,
            z.min(self.size_z() - 1) as i32,
        ))
    }

    /// The in-bounds cells of the 3x3 block around `cell`, excluding the
    /// center. No wraparound. Walkability is not filtered here; the search
    /// skips blocked neighbors itself. Order is deterministic but not part
    /// of the contract.
    pub fn neighbors(&self, cell: Point) -> SmallVec<[Point; 8]> {
        let mut neighbors = SmallVec::new();
        for dx in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                let p = Point::new(cell.x + dx, cell.y + dz);
                if self.in_bounds(p) {
                    neighbors.push(p);
                }
            }
        }
        neighbors
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, cell: Point) -> usize {
        self.components
            .find(self.blocked.get_ix(cell.x as usize, cell.y as usize))
    }

    /// Checks if start and goal are walkable and on the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if no 8-connected walkable path can exist between start and
    /// goal. Component equivalence makes this constant time; the search
    /// uses it to fail fast instead of flooding the whole component.
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        if self.walkable(start) && self.walkable(goal) {
            let start_ix = self.blocked.get_ix(start.x as usize, start.y as usize);
            let goal_ix = self.blocked.get_ix(goal.x as usize, goal.y as usize);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Links every walkable cell to its walkable forward neighbors. Each
    /// 8-connected adjacency is covered once by scanning only the four
    /// forward offsets.
    fn generate_components(&mut self) {
        let w = self.blocked.width;
        let h = self.blocked.height;
        self.components = UnionFind::new(w * h);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let cell = Point::new(x, y);
                if !self.walkable(cell) {
                    continue;
                }
                let cell_ix = self.blocked.get_ix(x as usize, y as usize);
                let forward = [
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                    Point::new(x, y + 1),
                ];
                for p in forward {
                    if self.walkable(p) {
                        let ix = self.blocked.get_ix(p.x as usize, p.y as usize);
                        self.components.union(cell_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for z in (0..self.blocked.height as i32).rev() {
            for x in 0..self.blocked.width as i32 {
                let c = if self.blocked.get(x as usize, z as usize) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
