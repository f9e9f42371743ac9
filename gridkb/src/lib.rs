//! gridkb front end: build a grid from configuration, materialize it as
//! facts, search it, and format the outcome.

pub mod cli;
pub mod config;
pub mod error;

use gridkb_core::Pos;
use gridkb_facts::{Maze, validate_endpoints};
use gridkb_search::{MoveGraph, bfs_distances, search};

pub use cli::Cli;
pub use config::{MazeConfig, RandomFill};
pub use error::CliError;

/// Result of solving one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub maze: Maze,
    /// Start to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Pos>>,
}

impl Outcome {
    /// Number of moves on the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        match &self.path {
            Some(path) => {
                let cells: Vec<String> = path.iter().map(Pos::to_string).collect();
                format!(
                    "Found path: [{}]\nSteps: {}",
                    cells.join(", "),
                    path.len() - 1
                )
            }
            None => "No path found.".to_string(),
        }
    }

    /// Machine-readable report.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "start": self.maze.start(),
            "goal": self.maze.goal(),
            "path": self.path,
            "steps": self.steps(),
        })
        .to_string()
    }
}

/// Validate the configuration, materialize it and run A*.
pub fn solve(cfg: &MazeConfig) -> Result<Outcome, CliError> {
    let maze = cfg.to_maze()?;
    let store = maze.to_facts();
    validate_endpoints(&store, maze.start(), maze.goal())?;

    let path = search(&store, maze.start(), maze.goal());
    if path.is_none() {
        let reached = bfs_distances(&MoveGraph::new(&store), maze.start()).len();
        log::info!(
            "goal {} lies outside the {} cells reachable from {}",
            maze.goal(),
            reached,
            maze.start()
        );
    }
    Ok(Outcome { maze, path })
}
