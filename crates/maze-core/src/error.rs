use std::fmt;

use crate::geom::Point;

/// Errors raised by maze construction and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid size is even or outside `MIN_SIZE..=MAX_SIZE`.
    InvalidSize { size: i32 },
    /// Rows of a textual maze have different widths, or it is not square.
    InconsistentSize(String),
    /// A character other than `#` or `.` was found in a textual maze.
    InvalidRune { ch: char, pos: Point },
    /// An algorithm name that does not match any known search strategy.
    UnknownAlgorithm(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(
                f,
                "maze size {size} is not an odd number in {}..={}",
                crate::MIN_SIZE,
                crate::MAX_SIZE
            ),
            Self::InconsistentSize(s) => write!(f, "maze: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "maze contains invalid rune \u{201c}{ch}\u{201d} at row {}, column {}",
                pos.row(),
                pos.col()
            ),
            Self::UnknownAlgorithm(name) => write!(f, "unknown search algorithm \u{201c}{name}\u{201d}"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_bounds() {
        let msg = MazeError::InvalidSize { size: 4 }.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains("5..=101"));
    }

    #[test]
    fn display_invalid_rune_position() {
        let err = MazeError::InvalidRune {
            ch: 'x',
            pos: Point::at(2, 3),
        };
        assert!(err.to_string().contains("row 2, column 3"));
    }
}
