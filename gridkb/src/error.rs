use std::path::PathBuf;

use gridkb_facts::MazeError;
use thiserror::Error;

/// Everything that can stop the front end before a search runs.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),
}
