//! Interactive layer over the maze crates.
//!
//! - [`Playback`] replays a [`SearchResult`](maze_paths::SearchResult) one
//!   cell per tick: the explored trace first, then the path.
//! - [`Navigator`] walks a player through the maze, cutting the trail back
//!   whenever the player steps onto it again.
//! - [`Session`] owns a maze together with a solver cache, a playback and a
//!   navigator, and exposes the operations an interactive front end needs.

pub mod navigator;
pub mod playback;
pub mod session;

pub use navigator::{Direction, Navigator};
pub use playback::{Phase, Playback};
pub use session::{MAX_STEP_SIZE, MIN_STEP_SIZE, Mode, SIZE_STEP, Session, SessionConfig, Stats};
