use std::path::PathBuf;

use clap::Parser;
use gridkb_core::Pos;

use crate::config::{MazeConfig, RandomFill};
use crate::error::CliError;

/// Find a shortest path across a grid with blocked cells.
///
/// Without arguments, solves the built-in 5x6 layout.
#[derive(Parser, Debug)]
#[command(name = "gridkb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON grid description; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<i32>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<i32>,

    /// Start cell as ROW,COL
    #[arg(short, long, value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Goal cell as ROW,COL
    #[arg(short, long, value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// Blocked cell as ROW,COL (repeatable); replaces configured obstacles
    #[arg(short, long = "obstacle", value_parser = parse_pos)]
    pub obstacles: Vec<Pos>,

    /// Also block random cells with this probability
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Load the config file (or the default layout) and apply flag overrides.
    pub fn to_config(&self) -> Result<MazeConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };
        if let Some(rows) = self.rows {
            cfg.rows = rows;
        }
        if let Some(cols) = self.cols {
            cfg.cols = cols;
        }
        if let Some(start) = self.start {
            cfg.start = start;
        }
        if let Some(goal) = self.goal {
            cfg.goal = goal;
        }
        if !self.obstacles.is_empty() {
            cfg.obstacles = self.obstacles.clone();
        }
        if let Some(density) = self.random {
            cfg.random = Some(RandomFill {
                density,
                seed: self.seed,
            });
        }
        Ok(cfg)
    }
}

/// Parse `ROW,COL` (whitespace around either number is allowed).
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row in {s:?}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column in {s:?}: {e}"))?;
    Ok(Pos::new(row, col))
}
