//! Manual, player-driven walks through a maze.

use maze_core::{Maze, Point};

/// A single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The `(dx, dy)` offset of this move.
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }

    /// Parse a single-letter move: `u d l r`, or the vi keys `k j h`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'u' | 'k' => Some(Self::Up),
            'd' | 'j' => Some(Self::Down),
            'l' | 'h' => Some(Self::Left),
            'r' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Tracks a player walking from the start of a maze towards its goal.
///
/// The trail records the route taken. Stepping back onto a cell already on
/// the trail cuts the trail back to that cell, so walking A→B→C→B leaves
/// `[A, B]` rather than `[A, B, C, B]`.
#[derive(Debug, Clone)]
pub struct Navigator {
    start: Point,
    goal: Point,
    trail: Vec<Point>,
    won: bool,
}

impl Navigator {
    /// A navigator standing on `start`.
    pub fn new(start: Point, goal: Point) -> Self {
        Self {
            start,
            goal,
            trail: vec![start],
            won: false,
        }
    }

    /// A navigator for `maze`'s own start and goal.
    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.start(), maze.goal())
    }

    /// Back to the start with a fresh trail.
    pub fn reset(&mut self) {
        self.trail.clear();
        self.trail.push(self.start);
        self.won = false;
    }

    /// Try to step in `direction`.
    ///
    /// Returns `false` without changing anything when the target is outside
    /// `maze`, is a wall, or the goal has already been reached.
    pub fn attempt_move(&mut self, maze: &Maze, direction: Direction) -> bool {
        if self.won {
            return false;
        }
        let target = self.position() + direction.delta();
        if !maze.is_open(target) {
            return false;
        }

        match self.trail.iter().position(|&p| p == target) {
            Some(i) => self.trail.truncate(i + 1),
            None => self.trail.push(target),
        }

        if target == self.goal {
            self.won = true;
        }
        true
    }

    /// The cell the player stands on.
    #[inline]
    pub fn position(&self) -> Point {
        self.trail.last().copied().unwrap_or(self.start)
    }

    /// The route from the start to the current position.
    #[inline]
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// Length of the trail, start included.
    #[inline]
    pub fn steps(&self) -> usize {
        self.trail.len()
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.won
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    const OPEN_ROOM: &str = "\
#####
#...#
#...#
#...#
#####";

    const CORRIDOR: &str = "\
#####
#...#
###.#
#...#
#####";

    fn room() -> (Maze, Navigator) {
        let maze = Maze::parse(OPEN_ROOM).unwrap();
        let nav = Navigator::for_maze(&maze);
        (maze, nav)
    }

    #[test]
    fn starts_on_start_cell() {
        let (maze, nav) = room();
        assert_eq!(nav.position(), maze.start());
        assert_eq!(nav.trail(), &[maze.start()]);
        assert_eq!(nav.steps(), 1);
        assert!(!nav.has_won());
    }

    #[test]
    fn walls_and_edges_reject_moves() {
        let (maze, mut nav) = room();
        assert!(!nav.attempt_move(&maze, Up));
        assert!(!nav.attempt_move(&maze, Left));
        assert_eq!(nav.trail(), &[maze.start()]);

        let edge = Maze::parse("...\n...\n...").unwrap();
        let mut nav = Navigator::new(Point::at(0, 0), Point::at(2, 2));
        assert!(!nav.attempt_move(&edge, Up));
        assert!(!nav.attempt_move(&edge, Left));
        assert_eq!(nav.position(), Point::at(0, 0));
    }

    #[test]
    fn stepping_back_truncates_then_extends() {
        let (maze, mut nav) = room();
        let a = Point::at(1, 1);
        let b = Point::at(1, 2);
        let d = Point::at(2, 2);

        assert!(nav.attempt_move(&maze, Right));
        assert!(nav.attempt_move(&maze, Right));
        assert!(nav.attempt_move(&maze, Left));
        assert_eq!(nav.trail(), &[a, b]);
        assert!(nav.attempt_move(&maze, Down));
        assert_eq!(nav.trail(), &[a, b, d]);
        assert_eq!(nav.position(), d);
    }

    #[test]
    fn returning_to_start_collapses_trail() {
        let (maze, mut nav) = room();
        for dir in [Right, Down, Left] {
            assert!(nav.attempt_move(&maze, dir));
        }
        assert_eq!(nav.steps(), 4);
        assert!(nav.attempt_move(&maze, Up));
        assert_eq!(nav.trail(), &[maze.start()]);
    }

    #[test]
    fn reaching_goal_wins_and_freezes() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let mut nav = Navigator::for_maze(&maze);
        for dir in [Right, Right, Down, Down] {
            assert!(nav.attempt_move(&maze, dir));
        }
        assert!(nav.has_won());
        assert_eq!(nav.position(), maze.goal());
        assert_eq!(nav.steps(), 5);
        assert!(!nav.attempt_move(&maze, Up));
        assert_eq!(nav.position(), maze.goal());
    }

    #[test]
    fn reset_restores_start() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let mut nav = Navigator::for_maze(&maze);
        for dir in [Right, Right, Down, Down] {
            nav.attempt_move(&maze, dir);
        }
        nav.reset();
        assert!(!nav.has_won());
        assert_eq!(nav.trail(), &[maze.start()]);
        assert!(nav.attempt_move(&maze, Right));
    }

    #[test]
    fn direction_letters() {
        let parsed: Vec<_> = "udlrKJHR".chars().filter_map(Direction::from_char).collect();
        assert_eq!(parsed, vec![Up, Down, Left, Right, Up, Down, Left, Right]);
        assert_eq!(Direction::from_char('x'), None);
        for d in Direction::ALL {
            assert_eq!(d.delta().x.abs() + d.delta().y.abs(), 1);
        }
    }
}
