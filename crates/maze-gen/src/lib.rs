//! Maze generation for the maze crates.
//!
//! [`MazeGen`] carves a perfect maze (exactly one simple path between any
//! two open cells) with randomized recursive backtracking.

pub mod mapgen;

pub use mapgen::{CARVE_DIRS, MazeGen};
