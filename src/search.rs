//! The A* run over a [NavGrid]: open set in an [IndexedHeap], per-search
//! scratch in an insertion-indexed map whose indices double as node ids for
//! heap position tracking and parent back-links.

use std::cmp::Ordering;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};

use crate::heap::{HeapItem, IndexedHeap};
use crate::nav_grid::{NavGrid, WorldPos};
use crate::simplify::simplify;
use crate::{C, D, E};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: u32 = u32::MAX;

/// Cost of one step between adjacent cells: [D] if the step changes both
/// coordinates, [C] otherwise.
pub fn step_cost(a: Point, b: Point) -> i32 {
    if a.x != b.x && a.y != b.y {
        D
    } else {
        C
    }
}

/// Diagonal distance between two cells: the exact cost of the cheapest
/// obstacle-free 8-connected walk, which makes it admissible and consistent
/// for the search. All arithmetic stays in integers.
pub fn heuristic(a: Point, b: Point) -> i32 {
    let delta_x = (a.x - b.x).abs();
    let delta_y = (a.y - b.y).abs();
    // Formula from https://github.com/riscy/a_star_on_grids to efficiently
    // compute the cost of a path taking the maximal amount of diagonal
    // steps before going straight.
    (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2
}

/// Total step cost along a cell path.
pub fn path_cost(cells: &[Point]) -> i32 {
    cells.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

/// Scratch state of one touched cell, keyed by cell in the per-search side
/// table. `parent` is the map index of the predecessor entry ([NO_PARENT]
/// for the start); `f = g + h` is always recomputed, never stored.
#[derive(Clone, Debug)]
struct NodeState {
    g: i32,
    h: i32,
    parent: u32,
    closed: bool,
}

/// Open-set entry: ordered by ascending `f = g + h`, ties broken by
/// ascending `h` so cost-equal frontiers expand toward the goal first.
#[derive(Clone, Debug)]
struct OpenNode {
    id: u32,
    g: i32,
    h: i32,
}

impl OpenNode {
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f() == other.f() && self.h == other.h
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.f().cmp(&other.f()) {
            Ordering::Equal => self.h.cmp(&other.h),
            ordering => ordering,
        }
    }
}

impl HeapItem for OpenNode {
    fn index(&self) -> usize {
        self.id as usize
    }
}

/// Cell-level result of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; carries the full start-to-goal cell path.
    Found(Vec<Point>),
    /// Start or goal is blocked, or the open set ran dry.
    Unreachable,
    /// The expansion budget of a bounded search ran out first.
    Cancelled,
}

/// World-level result of [Pathfinder::find_path]: `waypoints` holds the
/// direction-change positions from start to target, empty iff `!success`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    pub success: bool,
    pub waypoints: Vec<WorldPos>,
}

impl PathResult {
    fn failure() -> PathResult {
        PathResult {
            success: false,
            waypoints: Vec::new(),
        }
    }
}

/// Runs A* searches over a [NavGrid].
///
/// Owns the search scratch (open heap plus per-cell side table) and reuses
/// the allocations between runs. The grid itself is only ever read, so any
/// number of searches may run concurrently as long as each one goes through
/// its own `Pathfinder`.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    nodes: FxIndexMap<Point, NodeState>,
    open: IndexedHeap<OpenNode>,
}

impl Default for Pathfinder {
    fn default() -> Pathfinder {
        Pathfinder::new()
    }
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder {
            nodes: FxIndexMap::default(),
            open: IndexedHeap::with_capacity(0),
        }
    }

    /// Resolves a world-space request, runs the search to completion and
    /// reduces a found path to direction-change waypoints.
    ///
    /// Failures (unwalkable or rejected endpoints, no path) are reported as
    /// data, never as errors.
    pub fn find_path(&mut self, grid: &NavGrid, start: WorldPos, target: WorldPos) -> PathResult {
        let (Some(start_cell), Some(target_cell)) =
            (grid.world_to_cell(start), grid.world_to_cell(target))
        else {
            return PathResult::failure();
        };
        match self.search(grid, start_cell, target_cell) {
            SearchOutcome::Found(cells) => PathResult {
                success: true,
                waypoints: simplify(grid, &cells),
            },
            SearchOutcome::Unreachable | SearchOutcome::Cancelled => PathResult::failure(),
        }
    }

    /// Computes a cell path from start to goal, running to completion.
    pub fn search(&mut self, grid: &NavGrid, start: Point, goal: Point) -> SearchOutcome {
        self.run(grid, start, goal, usize::MAX)
    }

    /// Like [search](Self::search), but gives up with
    /// [SearchOutcome::Cancelled] once `max_expansions` nodes have been
    /// expanded. The budget is the only cancellation mechanism the core
    /// offers; there is no mid-search suspension.
    pub fn search_bounded(
        &mut self,
        grid: &NavGrid,
        start: Point,
        goal: Point,
        max_expansions: usize,
    ) -> SearchOutcome {
        self.run(grid, start, goal, max_expansions)
    }

    fn run(
        &mut self,
        grid: &NavGrid,
        start: Point,
        goal: Point,
        max_expansions: usize,
    ) -> SearchOutcome {
        if !grid.walkable(start) || !grid.walkable(goal) {
            return SearchOutcome::Unreachable;
        }
        // Components answer unreachability in constant time; the open set
        // would otherwise flood the whole component before giving up.
        if grid.unreachable(start, goal) {
            return SearchOutcome::Unreachable;
        }
        debug!("searching {} -> {}", start, goal);
        self.nodes.clear();
        self.open.reset(grid.cell_count());

        let start_h = heuristic(start, goal);
        self.nodes.insert(
            start,
            NodeState {
                g: 0,
                h: start_h,
                parent: NO_PARENT,
                closed: false,
            },
        );
        self.open.insert(OpenNode {
            id: 0,
            g: 0,
            h: start_h,
        });

        let mut expansions: usize = 0;
        while let Some(current) = self.open.remove_first() {
            let (&cell, state) = self.nodes.get_index_mut(current.id as usize).unwrap();
            state.closed = true;
            if cell == goal {
                return SearchOutcome::Found(reverse_path(&self.nodes, current.id as usize));
            }
            expansions += 1;
            if expansions > max_expansions {
                return SearchOutcome::Cancelled;
            }
            for neighbor in grid.neighbors(cell) {
                if !grid.walkable(neighbor) {
                    continue;
                }
                let tentative_g = current.g + step_cost(cell, neighbor);
                match self.nodes.entry(neighbor) {
                    Vacant(e) => {
                        let h = heuristic(neighbor, goal);
                        let id = e.index() as u32;
                        e.insert(NodeState {
                            g: tentative_g,
                            h,
                            parent: current.id,
                            closed: false,
                        });
                        self.open.insert(OpenNode {
                            id,
                            g: tentative_g,
                            h,
                        });
                    }
                    Occupied(mut e) => {
                        if e.get().closed || tentative_g >= e.get().g {
                            continue;
                        }
                        let h = heuristic(neighbor, goal);
                        let id = e.index();
                        let state = e.get_mut();
                        state.g = tentative_g;
                        state.h = h;
                        state.parent = current.id;
                        self.open.improve(id, |node| {
                            node.g = tentative_g;
                            node.h = h;
                        });
                    }
                }
            }
        }
        warn!(
            "open set exhausted although components marked {} reachable from {}",
            goal, start
        );
        SearchOutcome::Unreachable
    }
}

/// Walks the parent indices back from the goal entry and reverses the
/// result. Terminates because parents only ever point at entries that were
/// already closed when the link was written.
fn reverse_path(nodes: &FxIndexMap<Point, NodeState>, goal: usize) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(goal, |i| {
        nodes.get_index(*i).map(|(cell, state)| {
            *i = state.parent as usize;
            *cell
        })
    })
    .collect();
    path.reverse();
    path
}
