//! Plain-text frames of a maze with search and player overlays.

use std::collections::HashSet;

use maze_core::{Maze, Point, Tile};

pub const WALL: char = '#';
pub const FLOOR: char = ' ';
pub const EXPLORED: char = '.';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const PLAYER: char = '@';

/// What to draw on top of the bare maze.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overlay<'a> {
    pub explored: &'a [Point],
    pub path: &'a [Point],
    pub player: Option<Point>,
}

/// Render one frame, one text line per maze row.
///
/// Later layers win: explored, then path, then the endpoints, then the
/// player.
pub fn render(maze: &Maze, overlay: Overlay<'_>) -> String {
    let explored: HashSet<Point> = overlay.explored.iter().copied().collect();
    let path: HashSet<Point> = overlay.path.iter().copied().collect();
    let size = maze.size() as usize;
    let mut out = String::with_capacity(size * (size + 1));

    for (p, tile) in maze.iter() {
        let ch = if overlay.player == Some(p) {
            PLAYER
        } else if p == maze.start() {
            START
        } else if p == maze.goal() {
            GOAL
        } else if path.contains(&p) {
            PATH
        } else if explored.contains(&p) {
            EXPLORED
        } else if tile == Tile::Wall {
            WALL
        } else {
            FLOOR
        };
        out.push(ch);
        if p.col() == maze.size() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#####
#...#
###.#
#...#
#####";

    #[test]
    fn bare_maze() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let frame = render(&maze, Overlay::default());
        assert_eq!(frame, "#####\n#S  #\n### #\n#  G#\n#####\n");
    }

    #[test]
    fn overlays_stack() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let explored = [Point::at(1, 1), Point::at(1, 2), Point::at(1, 3), Point::at(3, 1)];
        let path = [Point::at(1, 1), Point::at(1, 2), Point::at(1, 3), Point::at(2, 3)];
        let frame = render(
            &maze,
            Overlay {
                explored: &explored,
                path: &path,
                player: Some(Point::at(1, 2)),
            },
        );
        assert_eq!(frame, "#####\n#S@*#\n###*#\n#. G#\n#####\n");
    }
}
