//! **maze-core**: the grid model shared by the maze crates.
//!
//! This crate provides geometry primitives, the [`Maze`] wall/open grid and
//! the [`MazeError`] type used across the workspace.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::MazeError;
pub use geom::{Point, Range};
pub use grid::{Maze, Tile};

/// Smallest maze side length accepted by generators.
pub const MIN_SIZE: i32 = 5;

/// Largest maze side length accepted by generators.
pub const MAX_SIZE: i32 = 101;

/// Check that `size` is an odd side length within `MIN_SIZE..=MAX_SIZE`.
///
/// Odd sizes keep the outer border solid when carving on odd coordinates.
pub fn validate_size(size: i32) -> Result<i32, MazeError> {
    if size % 2 == 1 && (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(MazeError::InvalidSize { size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_sizes_in_bounds_are_valid() {
        assert_eq!(validate_size(5), Ok(5));
        assert_eq!(validate_size(25), Ok(25));
        assert_eq!(validate_size(MAX_SIZE), Ok(MAX_SIZE));
    }

    #[test]
    fn even_or_out_of_bounds_sizes_are_rejected() {
        for size in [-1, 0, 3, 4, 10, MAX_SIZE + 2] {
            assert_eq!(validate_size(size), Err(MazeError::InvalidSize { size }));
        }
    }
}
