//! One owned value tying generation, solving, playback and manual play
//! together.

use log::debug;
use maze_core::{Maze, MazeError, Tile};
use maze_gen::MazeGen;
use maze_paths::{Algorithm, SearchResult, SearchSpace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::navigator::{Direction, Navigator};
use crate::playback::{Phase, Playback};

/// Amount [`Session::grow`] and [`Session::shrink`] change the side by.
pub const SIZE_STEP: i32 = 4;

/// Smallest side reachable by [`Session::shrink`].
pub const MIN_STEP_SIZE: i32 = 9;

/// Largest side reachable by [`Session::grow`].
pub const MAX_STEP_SIZE: i32 = 49;

/// Who is moving through the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// The solver's result is replayed.
    #[default]
    Auto,
    /// The player walks the maze.
    Manual,
}

/// Startup parameters of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub size: i32,
    /// Fixed seed for reproducible mazes; `None` draws from the OS.
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub mode: Mode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 25,
            seed: None,
            algorithm: Algorithm::AStar,
            mode: Mode::Auto,
        }
    }
}

/// Figures for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub path_length: usize,
    pub nodes_explored: usize,
    pub solve_time_ms: f64,
    pub player_steps: usize,
}

/// A maze plus everything needed to solve it, replay the solution and walk
/// it by hand.
///
/// A session always holds a generated maze. Regenerating, resizing or
/// switching algorithm drops the current result.
pub struct Session {
    config: SessionConfig,
    mapgen: MazeGen<StdRng>,
    maze: Maze,
    space: SearchSpace,
    playback: Playback,
    navigator: Navigator,
    mode: Mode,
    algorithm: Algorithm,
}

impl Session {
    /// Build a session and generate its first maze.
    pub fn new(config: SessionConfig) -> Result<Self, MazeError> {
        let size = maze_core::validate_size(config.size)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let maze = Maze::new(size);
        let mut session = Self {
            config,
            mapgen: MazeGen::new(rng),
            space: SearchSpace::new(maze.bounds()),
            navigator: Navigator::for_maze(&maze),
            maze,
            playback: Playback::new(),
            mode: config.mode,
            algorithm: config.algorithm,
        };
        session.generate();
        Ok(session)
    }

    /// Carve a fresh maze at the current size.
    ///
    /// Any result is dropped and the player goes back to the start.
    pub fn generate(&mut self) {
        let size = self.config.size;
        if self.maze.size() != size {
            self.maze = Maze::new(size);
        }
        let steps = self.mapgen.carve(&mut self.maze);
        self.space.set_range(self.maze.bounds());
        self.playback.clear();
        self.navigator = Navigator::for_maze(&self.maze);
        debug!(
            "new {size}x{size} maze ({steps} carving steps, {} open cells)",
            self.maze.count(Tile::Open)
        );
    }

    /// Change the side length and regenerate.
    pub fn set_size(&mut self, size: i32) -> Result<(), MazeError> {
        self.config.size = maze_core::validate_size(size)?;
        self.generate();
        Ok(())
    }

    /// Step the size up by [`SIZE_STEP`], up to [`MAX_STEP_SIZE`].
    ///
    /// Returns whether the size changed. A size already at or above the step
    /// range is left alone.
    pub fn grow(&mut self) -> bool {
        if self.config.size >= MAX_STEP_SIZE {
            return false;
        }
        let size = (self.config.size + SIZE_STEP).min(MAX_STEP_SIZE);
        self.step_size(size)
    }

    /// Step the size down by [`SIZE_STEP`], down to [`MIN_STEP_SIZE`].
    ///
    /// Returns whether the size changed. A size already at or below the step
    /// range is left alone.
    pub fn shrink(&mut self) -> bool {
        if self.config.size <= MIN_STEP_SIZE {
            return false;
        }
        let size = (self.config.size - SIZE_STEP).max(MIN_STEP_SIZE);
        self.step_size(size)
    }

    fn step_size(&mut self, size: i32) -> bool {
        if size == self.config.size {
            return false;
        }
        // Step bounds are odd, so a clamped odd size stays odd.
        self.config.size = size;
        self.generate();
        true
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select the solving strategy, dropping any result of the previous one.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.playback.clear();
        debug!("algorithm set to {algorithm}");
    }

    /// Move to the next strategy in [`Algorithm::ALL`] order.
    pub fn cycle_algorithm(&mut self) -> Algorithm {
        self.set_algorithm(self.algorithm.next());
        self.algorithm
    }

    /// Solve from start to goal with the selected strategy and start
    /// replaying the result. Switches to [`Mode::Auto`].
    pub fn solve(&mut self) {
        self.mode = Mode::Auto;
        let result = self.space.solve(
            &self.maze,
            self.algorithm,
            self.maze.start(),
            self.maze.goal(),
        );
        debug!(
            "{}: path {} cells, {} explored, {:.3} ms",
            result.algorithm,
            result.path_length(),
            result.nodes_explored(),
            result.solve_time_ms
        );
        self.playback.start(result);
    }

    /// Drop the current result.
    pub fn clear(&mut self) {
        self.playback.clear();
    }

    /// Advance playback one step and report the new phase.
    pub fn tick(&mut self) -> Phase {
        self.playback.tick();
        self.playback.phase()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flip between auto and manual mode.
    ///
    /// Refused while a result is being replayed. Entering manual mode puts
    /// the player back on the start and drops the current result.
    pub fn toggle_mode(&mut self) -> bool {
        if self.playback.is_animating() {
            return false;
        }
        self.mode = match self.mode {
            Mode::Auto => {
                self.navigator.reset();
                self.playback.clear();
                Mode::Manual
            }
            Mode::Manual => Mode::Auto,
        };
        debug!("mode is now {:?}", self.mode);
        true
    }

    /// Step the player in manual mode. Returns whether the player moved.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.mode != Mode::Manual || self.playback.is_animating() {
            return false;
        }
        let moved = self.navigator.attempt_move(&self.maze, direction);
        if moved && self.navigator.has_won() {
            debug!("goal reached in {} steps", self.navigator.steps());
        }
        moved
    }

    pub fn reset_player(&mut self) {
        self.navigator.reset();
    }

    /// Current figures. Result fields are zero when nothing is solved.
    pub fn stats(&self) -> Stats {
        let result = self.playback.result();
        Stats {
            path_length: result.map_or(0, SearchResult::path_length),
            nodes_explored: result.map_or(0, SearchResult::nodes_explored),
            solve_time_ms: result.map_or(0.0, |r| r.solve_time_ms),
            player_steps: self.navigator.steps(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.config.size
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn result(&self) -> Option<&SearchResult> {
        self.playback.result()
    }

    #[inline]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;

    fn seeded(seed: u64, size: i32) -> Session {
        Session::new(SessionConfig {
            size,
            seed: Some(seed),
            ..SessionConfig::default()
        })
        .unwrap()
    }

    fn direction_between(from: Point, to: Point) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|d| from + d.delta() == to)
            .unwrap()
    }

    fn run_to_idle(session: &mut Session) -> usize {
        let mut ticks = 0;
        while session.playback().is_animating() {
            session.tick();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.size, 25);
        assert_eq!(config.seed, None);
        assert_eq!(config.algorithm, Algorithm::AStar);
        assert_eq!(config.mode, Mode::Auto);
        let session = Session::new(config).unwrap();
        assert_eq!(session.maze().size(), 25);
        assert!(session.maze().is_open(session.maze().start()));
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        for size in [4, 8, 103, -1] {
            let config = SessionConfig {
                size,
                ..SessionConfig::default()
            };
            assert!(matches!(
                Session::new(config),
                Err(MazeError::InvalidSize { .. })
            ));
        }
        let mut session = seeded(1, 11);
        assert!(session.set_size(12).is_err());
        assert_eq!(session.size(), 11);
        session.set_size(15).unwrap();
        assert_eq!(session.maze().size(), 15);
        assert_eq!(session.navigator().goal(), Point::at(13, 13));
    }

    #[test]
    fn seeds_reproduce_mazes() {
        let a = seeded(42, 21);
        let b = seeded(42, 21);
        assert_eq!(a.maze(), b.maze());
    }

    #[test]
    fn grow_and_shrink_stay_in_step_bounds() {
        let mut session = seeded(3, 41);
        assert!(session.grow());
        assert_eq!(session.size(), 45);
        assert!(session.grow());
        assert_eq!(session.size(), 49);
        assert!(!session.grow());

        let mut session = seeded(3, 17);
        assert!(session.shrink());
        assert_eq!(session.size(), 13);
        assert!(session.shrink());
        assert_eq!(session.size(), 9);
        assert!(!session.shrink());
        assert_eq!(session.maze().size(), 9);
    }

    #[test]
    fn stepping_never_moves_the_wrong_way() {
        let mut large = seeded(3, 101);
        let before = large.maze().clone();
        assert!(!large.grow());
        assert_eq!(large.size(), 101);
        assert_eq!(large.maze(), &before);
        assert!(large.shrink());
        assert_eq!(large.size(), 97);

        let mut small = seeded(3, 5);
        assert!(!small.shrink());
        assert_eq!(small.size(), 5);
        assert!(small.grow());
        assert_eq!(small.size(), 9);
    }

    #[test]
    fn solve_replays_then_idles() {
        let mut session = seeded(7, 15);
        session.solve();
        assert_eq!(session.playback().phase(), Phase::ShowingExploration);
        let result = session.result().unwrap().clone();
        assert!(result.found());
        assert_eq!(result.algorithm, Algorithm::AStar);

        let ticks = run_to_idle(&mut session);
        assert_eq!(ticks, result.nodes_explored() + result.path_length());
        let stats = session.stats();
        assert_eq!(stats.path_length, result.path_length());
        assert_eq!(stats.nodes_explored, result.nodes_explored());
    }

    #[test]
    fn switching_algorithm_drops_result() {
        let mut session = seeded(7, 15);
        session.solve();
        assert_eq!(session.cycle_algorithm(), Algorithm::Dijkstra);
        assert!(session.result().is_none());
        assert!(!session.playback().is_animating());
        assert_eq!(session.stats().path_length, 0);

        session.set_algorithm(Algorithm::Dfs);
        session.solve();
        assert_eq!(session.result().map(|r| r.algorithm), Some(Algorithm::Dfs));
        session.clear();
        assert!(session.result().is_none());
        assert_eq!(session.tick(), Phase::Idle);
    }

    #[test]
    fn toggle_is_refused_while_animating() {
        let mut session = seeded(5, 11);
        session.solve();
        assert!(!session.toggle_mode());
        assert_eq!(session.mode(), Mode::Auto);
        run_to_idle(&mut session);
        assert!(session.toggle_mode());
        assert_eq!(session.mode(), Mode::Manual);
        assert!(session.result().is_none());
        assert!(session.toggle_mode());
        assert_eq!(session.mode(), Mode::Auto);
    }

    #[test]
    fn player_only_moves_in_manual_mode() {
        let mut session = seeded(9, 11);
        assert!(!session.move_player(Direction::Right));
        assert!(!session.move_player(Direction::Down));
        assert_eq!(session.stats().player_steps, 1);

        session.toggle_mode();
        assert!(!session.move_player(Direction::Up));
        assert!(!session.move_player(Direction::Left));
        assert!(session.move_player(Direction::Right) || session.move_player(Direction::Down));
        assert_eq!(session.stats().player_steps, 2);

        session.reset_player();
        assert_eq!(session.navigator().position(), session.maze().start());
    }

    #[test]
    fn walking_the_solution_wins() {
        let mut session = seeded(13, 19);
        session.set_algorithm(Algorithm::Bfs);
        session.solve();
        run_to_idle(&mut session);
        let path = session.result().unwrap().path.clone();

        assert!(session.toggle_mode());
        for pair in path.windows(2) {
            assert!(session.move_player(direction_between(pair[0], pair[1])));
        }
        assert!(session.navigator().has_won());
        assert_eq!(session.stats().player_steps, path.len());
        assert!(!session.move_player(Direction::Left));
    }

    #[test]
    fn solve_returns_to_auto_mode() {
        let mut session = seeded(2, 9);
        session.toggle_mode();
        session.solve();
        assert_eq!(session.mode(), Mode::Auto);
        assert!(session.playback().is_animating());
    }

    #[test]
    fn generate_resets_player_and_result() {
        let mut session = seeded(4, 13);
        session.toggle_mode();
        let _ = session.move_player(Direction::Right) || session.move_player(Direction::Down);
        session.generate();
        assert_eq!(session.stats().player_steps, 1);
        assert!(session.result().is_none());
        assert_eq!(session.mode(), Mode::Manual);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn config_and_stats_serialize() {
            let config = SessionConfig {
                size: 31,
                seed: Some(99),
                algorithm: Algorithm::Bfs,
                mode: Mode::Manual,
            };
            let json = serde_json::to_string(&config).unwrap();
            let back: SessionConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);

            let stats = Stats {
                path_length: 41,
                nodes_explored: 90,
                solve_time_ms: 0.5,
                player_steps: 3,
            };
            let json = serde_json::to_string(&stats).unwrap();
            assert_eq!(serde_json::from_str::<Stats>(&json).unwrap(), stats);
        }
    }
}
