use maze_core::Point;

use crate::Algorithm;

/// The outcome of one solve: the route found plus the order in which cells
/// were finalized.
///
/// An unreachable goal is not an error: `path` is empty and `explored` holds
/// whatever the search visited before its frontier ran dry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Cells from start to goal inclusive.
    pub path: Vec<Point>,
    /// Cells in the order they were popped and finalized.
    pub explored: Vec<Point>,
    /// Wall-clock duration of the search alone, in milliseconds.
    pub solve_time_ms: f64,
}

impl SearchResult {
    /// A result with nothing found and nothing explored.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Number of cells finalized by the search.
    #[inline]
    pub fn nodes_explored(&self) -> usize {
        self.explored.len()
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Moves along the path, i.e. `path_length() - 1`, or `None` when no
    /// path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}
