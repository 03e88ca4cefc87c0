//! The [`Maze`] grid: a square matrix of [`Tile`]s.
//!
//! A maze owns its storage outright. It is built once (by a generator or
//! by [`Maze::parse`]) and replaced wholesale on regeneration.
//!
//! The textual form uses `#` for walls and `.` for open cells, one row per
//! line.

use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::{Point, Range};

/// The state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Open,
}

impl Tile {
    /// The character used in the textual form.
    pub const fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
        }
    }

    /// Parse a textual form character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open),
            _ => None,
        }
    }
}

/// Number of cells in a `size` × `size` grid, computed without `i32`
/// overflow.
#[inline]
fn cell_count(size: i32) -> usize {
    let side = size.max(0) as usize;
    side * side
}

/// A square grid of [`Tile`]s addressed by [`Point`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    tiles: Vec<Tile>,
    size: i32,
}

impl Maze {
    /// Create a `size` × `size` maze where every cell is a wall.
    ///
    /// No size validation happens here; generators check their own bounds.
    pub fn new(size: i32) -> Self {
        Self::filled(size, Tile::Wall)
    }

    /// Create a `size` × `size` maze filled with `tile`.
    pub fn filled(size: i32, tile: Tile) -> Self {
        let size = size.max(0);
        Self {
            tiles: vec![tile; cell_count(size)],
            size,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The bounding range of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The fixed start cell, (1, 1).
    #[inline]
    pub fn start(&self) -> Point {
        Point::at(1, 1)
    }

    /// The fixed goal cell, (N-2, N-2).
    #[inline]
    pub fn goal(&self) -> Point {
        Point::at(self.size - 2, self.size - 2)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.size as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the entire maze with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Whether `p` is an open cell. Out-of-bounds points are never open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// The in-bounds open neighbours of `p`, in the fixed order right, down,
    /// left, up.
    pub fn neighbors_4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_open(n))
    }

    /// Count how many cells equal the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }

    /// Parse a maze from its textual form.
    ///
    /// Leading and trailing whitespace around the whole string is ignored.
    /// Every line must have the same width and the maze must be square.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        let mut tiles = Vec::new();
        let mut width: Option<i32> = None;
        let mut height: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut w: i32 = 0;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(MazeError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                w += 1;
            }
            if *width.get_or_insert(w) != w {
                return Err(MazeError::InconsistentSize(s.to_string()));
            }
            height += 1;
        }

        if width.unwrap_or(0) != height {
            return Err(MazeError::InconsistentSize(s.to_string()));
        }
        Ok(Self {
            tiles,
            size: height,
        })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.size.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::parse("###\n#.#\n###").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
