//! The shared search loop behind every [`Algorithm`].

use std::time::Instant;

use log::{debug, warn};
use maze_core::{Point, Range};

use crate::frontier::Frontier;
use crate::traits::AstarPather;
use crate::{Algorithm, SearchResult};

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Reusable search state for one grid rectangle.
///
/// `SearchSpace` owns the per-cell node array. A generation counter lazily
/// invalidates it between solves, so repeated solves on the same bounds do
/// not allocate node storage again.
#[derive(Debug)]
pub struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchSpace {
    /// Create a new `SearchSpace` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// Node storage is kept when the new range fits in it; otherwise it is
    /// reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if new_len <= self.nodes.len() {
            self.bump_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    fn bump_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could now look current.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Search from `from` to `to` with the given strategy.
    ///
    /// Every cell is appended to `explored` the moment it is popped and
    /// finalized, and the search stops as soon as the goal is popped. If
    /// either endpoint is outside the range or not passable the result is
    /// empty.
    pub fn solve<P: AstarPather>(
        &mut self,
        pather: &P,
        algorithm: Algorithm,
        from: Point,
        to: Point,
    ) -> SearchResult {
        let started = Instant::now();
        let mut result = SearchResult::empty(algorithm);

        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            warn!("{algorithm}: endpoint {from} or {to} is outside {}", self.rng);
            return result;
        };
        if !pather.passable(from) || !pather.passable(to) {
            warn!("{algorithm}: endpoint {from} or {to} is not open");
            return result;
        }

        let cur_gen = self.bump_generation();
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut frontier = Frontier::for_algorithm(algorithm);
        frontier.push(start_idx, from, pather.estimate(from, to));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = frontier.pop() else {
                break 'search false;
            };

            // Skip stale heap entries and cells pushed more than once.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;

            let current_point = self.point(ci);
            result.explored.push(current_point);

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                let seen = n.generation == cur_gen;
                match algorithm {
                    Algorithm::AStar | Algorithm::Dijkstra => {
                        if seen && tentative_g >= n.g {
                            continue;
                        }
                        let h = match algorithm {
                            Algorithm::AStar => pather.estimate(np, to),
                            _ => 0,
                        };
                        n.g = tentative_g;
                        n.parent = ci;
                        n.closed = false;
                        frontier.push(ni, np, tentative_g + h);
                    }
                    // Visited on enqueue: each cell enters the queue once.
                    Algorithm::Bfs => {
                        if seen {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = ci;
                        n.closed = false;
                        frontier.push(ni, np, tentative_g);
                    }
                    // Visited on pop: a cell may be pushed again, and the
                    // latest pusher becomes its parent.
                    Algorithm::Dfs => {
                        if seen && n.closed {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = ci;
                        n.closed = false;
                        frontier.push(ni, np, tentative_g);
                    }
                }
                n.generation = cur_gen;
            }
        };

        self.nbuf = nbuf;

        if found {
            let mut ci = goal_idx;
            while ci != NO_PARENT {
                result.path.push(self.point(ci));
                ci = self.nodes[ci].parent;
            }
            result.path.reverse();
        }

        result.solve_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "{algorithm}: explored {} cells, path of {} cells in {:.3} ms",
            result.nodes_explored(),
            result.path_length(),
            result.solve_time_ms
        );
        result
    }
}
