//! Grid configuration loaded from JSON and/or command-line flags.

use std::path::Path;

use gridkb_core::Pos;
use gridkb_facts::Maze;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Random obstacle placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomFill {
    /// Probability that any given cell is blocked.
    pub density: f64,
    /// Seed for reproducible layouts.
    #[serde(default)]
    pub seed: u64,
}

/// Everything needed to build a [`Maze`]. Missing fields fall back to the
/// 5x6 reference layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub goal: Pos,
    pub obstacles: Vec<Pos>,
    /// When set, obstacles are generated and added to `obstacles`.
    pub random: Option<RandomFill>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        let sample = Maze::sample();
        Self {
            rows: sample.bounds().rows(),
            cols: sample.bounds().cols(),
            start: sample.start(),
            goal: sample.goal(),
            obstacles: sample.obstacles().collect(),
            random: None,
        }
    }
}

impl MazeConfig {
    /// Parse a JSON document.
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the maze and check its endpoints.
    pub fn to_maze(&self) -> Result<Maze, CliError> {
        let maze = match self.random {
            Some(fill) => {
                let mut rng = StdRng::seed_from_u64(fill.seed);
                Maze::random(self.rows, self.cols, self.start, self.goal, fill.density, &mut rng)
            }
            None => Maze::new(self.rows, self.cols, self.start, self.goal),
        }
        .with_obstacles(self.obstacles.iter().copied());
        maze.validate()?;
        Ok(maze)
    }
}
