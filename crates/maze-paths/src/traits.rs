use maze_core::{Maze, Point};

use crate::distance::manhattan;

/// Minimal search interface: passability and neighbour enumeration.
pub trait Pather {
    /// Whether `p` can be stood on.
    fn passable(&self, p: Point) -> bool;

    /// Append neighbours of `p` into `buf`. The caller clears `buf` before
    /// calling. The order must be deterministic; uninformed searches break
    /// ties by it.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for Maze {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_open(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.neighbors_4(p));
    }
}

/// Every step through a maze costs one.
impl WeightedPather for Maze {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for Maze {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
