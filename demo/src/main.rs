//! Generate a maze, solve it with each strategy and optionally walk it.
//!
//! Usage:
//!   mazes --size 21 --seed 7 --algorithm bfs --algorithm a* --moves rrdd

mod render;

use std::error::Error;

use clap::Parser;
use log::{info, warn};
use maze_paths::Algorithm;
use maze_play::{Direction, Mode, Session, SessionConfig};

use render::{Overlay, render};

#[derive(Debug, Parser)]
#[command(name = "mazes")]
#[command(about = "Generate a maze and compare path-finding strategies", long_about = None)]
struct Args {
    /// Side length of the maze; odd, between 5 and 101.
    #[arg(short, long, default_value = "25")]
    size: i32,
    /// Seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,
    /// Strategy to run (astar, dijkstra, bfs, dfs). Repeatable; all by default.
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,
    /// Manual walk from the start, one letter per step (u, d, l, r).
    #[arg(short, long)]
    moves: Option<String>,
    /// Print statistics only.
    #[arg(long)]
    no_maze: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut session = Session::new(SessionConfig {
        size: args.size,
        seed: args.seed,
        ..SessionConfig::default()
    })?;
    info!("{0}x{0} maze", session.size());
    if !args.no_maze {
        println!("{}", render(session.maze(), Overlay::default()));
    }

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };
    for algorithm in algorithms {
        session.set_algorithm(algorithm);
        session.solve();
        let mut frames = 0;
        while session.playback().is_animating() {
            session.tick();
            frames += 1;
        }

        let stats = session.stats();
        if stats.path_length == 0 {
            warn!("{algorithm}: no path to the goal");
        }
        info!(
            "{algorithm:>8}: path {:>4}  explored {:>5}  {:>8.3} ms  ({frames} frames)",
            stats.path_length, stats.nodes_explored, stats.solve_time_ms
        );
        if !args.no_maze {
            let playback = session.playback();
            let frame = render(
                session.maze(),
                Overlay {
                    explored: playback.visible_explored(),
                    path: playback.visible_path(),
                    player: None,
                },
            );
            println!("{algorithm}\n{frame}");
        }
    }

    if let Some(moves) = &args.moves {
        walk(&mut session, moves)?;
        if !args.no_maze {
            let nav = session.navigator();
            let frame = render(
                session.maze(),
                Overlay {
                    explored: &[],
                    path: nav.trail(),
                    player: Some(nav.position()),
                },
            );
            println!("{frame}");
        }
    }
    Ok(())
}

/// Replay `moves` in manual mode, logging rejected steps.
fn walk(session: &mut Session, moves: &str) -> Result<(), Box<dyn Error>> {
    if session.mode() != Mode::Manual && !session.toggle_mode() {
        return Err("cannot enter manual mode while a result is replaying".into());
    }
    for (i, ch) in moves.chars().enumerate() {
        let direction =
            Direction::from_char(ch).ok_or_else(|| format!("invalid move {ch:?} at {i}"))?;
        if !session.move_player(direction) {
            warn!("move {i} ({direction:?}) blocked");
        }
    }

    let nav = session.navigator();
    if nav.has_won() {
        info!("reached the goal with a {}-cell trail", nav.steps());
    } else {
        info!("stopped at {} after a {}-cell trail", nav.position(), nav.steps());
    }
    Ok(())
}
