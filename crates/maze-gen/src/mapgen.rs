//! Randomized recursive-backtracking maze carver.
//!
//! Rooms live on odd coordinates; even coordinates start as walls and are
//! only opened when they join two rooms. The carve walks an explicit stack
//! instead of recursing, so large grids cannot overflow the call stack.

use log::debug;
use maze_core::{Maze, MazeError, Point, Tile};
use rand::Rng;

/// Two-cell carving steps, as `(dx, dy)`: right, down, left, up.
pub const CARVE_DIRS: [Point; 4] = [
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(0, -2),
];

/// Maze generator driven by a caller-supplied random source.
///
/// Pass a seeded generator (e.g. `StdRng::seed_from_u64`) for reproducible
/// mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a new perfect maze of side `size`.
    ///
    /// `size` must be odd and within `MIN_SIZE..=MAX_SIZE`; anything else
    /// is rejected before a grid is allocated.
    pub fn generate(&mut self, size: i32) -> Result<Maze, MazeError> {
        let size = maze_core::validate_size(size)?;
        let mut maze = Maze::new(size);
        let steps = self.carve(&mut maze);
        debug!(
            "generated {size}x{size} maze: {steps} carving steps, {} open cells",
            maze.count(Tile::Open)
        );
        Ok(maze)
    }

    /// Carve a maze into `maze`, resetting it to walls first.
    ///
    /// Returns the number of carving steps taken. Each step opens one wall
    /// cell and one room cell, so a freshly carved maze has
    /// `2 * steps + 1` open cells.
    pub fn carve(&mut self, maze: &mut Maze) -> usize {
        maze.fill(Tile::Wall);
        let bounds = maze.bounds();
        let start = maze.start();
        let mut steps = 0;
        let mut candidates: Vec<Point> = Vec::with_capacity(CARVE_DIRS.len());

        maze.set(start, Tile::Open);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            candidates.clear();
            candidates.extend(
                CARVE_DIRS
                    .iter()
                    .map(|&d| current + d)
                    .filter(|&n| bounds.contains_inner(n) && maze.at(n) == Some(Tile::Wall)),
            );

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let next = candidates[self.rng.random_range(0..candidates.len())];
            let between = Point::new(
                current.x + (next.x - current.x) / 2,
                current.y + (next.y - current.y) / 2,
            );
            maze.set(between, Tile::Open);
            maze.set(next, Tile::Open);
            stack.push(next);
            steps += 1;
        }

        // Restore the endpoint invariant explicitly; an even size would
        // otherwise leave the goal sealed.
        maze.set(start, Tile::Open);
        let goal = maze.goal();
        maze.set(goal, Tile::Open);

        steps
    }
}
