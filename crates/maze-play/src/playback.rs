//! Step-driven replay of a [`SearchResult`].
//!
//! [`Playback`] first reveals the explored trace one cell per tick, then the
//! path one cell per tick, then goes idle. It never looks at a clock; the
//! caller decides how often to [`tick`](Playback::tick).

use log::trace;
use maze_core::Point;
use maze_paths::SearchResult;

/// Which part of a result is being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    ShowingExploration,
    ShowingPath,
    #[default]
    Idle,
}

/// Replays a search result frame by frame.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    result: Option<SearchResult>,
    phase: Phase,
    step: usize,
}

impl Playback {
    /// An idle playback holding no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `result` and restart from its first explored cell.
    ///
    /// Empty phases are skipped, so a result with no explored cells starts
    /// on its path and a result with nothing at all is idle immediately.
    pub fn start(&mut self, result: SearchResult) {
        self.result = Some(result);
        self.step = 0;
        self.phase = Phase::ShowingExploration;
        if self.explored().is_empty() {
            self.enter_path_phase();
        }
    }

    /// Drop the held result and go idle.
    pub fn clear(&mut self) {
        self.result = None;
        self.phase = Phase::Idle;
        self.step = 0;
    }

    /// Advance one step.
    ///
    /// From the start of a result, exactly `|explored| + |path|` ticks reach
    /// [`Phase::Idle`]. Ticking while idle does nothing.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::ShowingExploration => {
                self.step += 1;
                if self.step >= self.explored().len() {
                    self.enter_path_phase();
                }
            }
            Phase::ShowingPath => {
                self.step += 1;
                if self.step >= self.path().len() {
                    self.enter_idle();
                }
            }
            Phase::Idle => {}
        }
    }

    fn enter_path_phase(&mut self) {
        self.step = 0;
        if self.path().is_empty() {
            self.enter_idle();
        } else {
            trace!("playback: showing path");
            self.phase = Phase::ShowingPath;
        }
    }

    fn enter_idle(&mut self) {
        trace!("playback: idle");
        self.phase = Phase::Idle;
        self.step = 0;
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The step cursor within the current phase.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether a reveal is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The result being (or last) replayed.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    fn explored(&self) -> &[Point] {
        self.result.as_ref().map_or(&[][..], |r| r.explored.as_slice())
    }

    fn path(&self) -> &[Point] {
        self.result.as_ref().map_or(&[][..], |r| r.path.as_slice())
    }

    /// Explored cells to draw now: a growing prefix while exploring, the
    /// whole trace once idle, nothing while the path is being revealed.
    pub fn visible_explored(&self) -> &[Point] {
        let explored = self.explored();
        match self.phase {
            Phase::ShowingExploration => &explored[..self.step.min(explored.len())],
            Phase::ShowingPath => &[],
            Phase::Idle => explored,
        }
    }

    /// Path cells to draw now: a growing prefix while the path is revealed,
    /// the whole path once idle, nothing while exploring.
    pub fn visible_path(&self) -> &[Point] {
        let path = self.path();
        match self.phase {
            Phase::ShowingExploration => &[],
            Phase::ShowingPath => &path[..self.step.min(path.len())],
            Phase::Idle => path,
        }
    }
}
