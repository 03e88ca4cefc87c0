//! Maze solving with recorded exploration traces.
//!
//! Four strategies share one search loop ([`SearchSpace::solve`]):
//!
//! - **A\*** with a Manhattan heuristic
//! - **Dijkstra** (A\* without the heuristic)
//! - **BFS**, visiting cells when they are enqueued
//! - **DFS**, visiting cells when they are popped; not shortest-path
//!
//! Each solve returns a [`SearchResult`] holding the path and the order in
//! which cells were finalized, for step-by-step replay.
//!
//! Priority-queue ties in A\* and Dijkstra are broken by position: among
//! equal keys the smallest `(row, col)` is popped first.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | passability and neighbours |
//! | [`WeightedPather`] : [`Pather`] | edge cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic |
//!
//! [`maze_core::Maze`] implements all three with unit costs.

mod algorithm;
mod distance;
mod frontier;
mod result;
mod search;
mod traits;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use result::SearchResult;
pub use search::SearchSpace;
pub use traits::{AstarPather, Pather, WeightedPather};

use maze_core::{Maze, Point};

/// Solve `maze` from `from` to `to` with a throwaway [`SearchSpace`].
pub fn solve(maze: &Maze, algorithm: Algorithm, from: Point, to: Point) -> SearchResult {
    SearchSpace::new(maze.bounds()).solve(maze, algorithm, from, to)
}
