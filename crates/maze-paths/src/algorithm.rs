use std::fmt;
use std::str::FromStr;

use maze_core::MazeError;

/// The interchangeable search strategies.
///
/// They share one search loop and differ only in frontier ordering and in
/// when a cell counts as visited:
///
/// | strategy | frontier | visited when | shortest path |
/// |---|---|---|---|
/// | `AStar` | min-heap on `g + manhattan` | popped | yes |
/// | `Dijkstra` | min-heap on `g` | popped | yes |
/// | `Bfs` | FIFO queue | enqueued | yes |
/// | `Dfs` | LIFO stack | popped | no |
///
/// `AStar` keeps a closed set like `Dijkstra`: a stale heap entry for a cell
/// that was already finalized is dropped on pop, so no cell is explored
/// twice. A textbook A\* without a closed set would list such re-pops in its
/// trace; on perfect mazes there are none and the traces coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Every strategy, in selection order.
    pub const ALL: [Algorithm; 4] = [Self::AStar, Self::Dijkstra, Self::Bfs, Self::Dfs];

    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// The following strategy in selection order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::AStar => Self::Dijkstra,
            Self::Dijkstra => Self::Bfs,
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::AStar,
        }
    }

    /// Whether the strategy always finds a shortest path on a unit-cost grid.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all() {
        let mut a = Algorithm::AStar;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(a);
            a = a.next();
        }
        assert_eq!(seen, Algorithm::ALL);
        assert_eq!(a, Algorithm::AStar);
    }

    #[test]
    fn parse_accepts_names_and_aliases() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" Dfs ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(MazeError::UnknownAlgorithm("greedy".into()))
        );
    }

    #[test]
    fn only_dfs_is_not_optimal() {
        let optimal: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_optimal()).collect();
        assert_eq!(optimal, vec![Algorithm::AStar, Algorithm::Dijkstra, Algorithm::Bfs]);
    }
}
