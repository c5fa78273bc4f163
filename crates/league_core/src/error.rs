//! Error type shared by the league crates

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = LeagueError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no match with id {0}")]
    MatchNotFound(String),

    #[error("match {id}: completed must be set exactly when both scores are recorded")]
    InconsistentMatch { id: String },

    #[error("invalid score {0:?}: expected a non-negative integer")]
    InvalidScore(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tournament data: {0}")]
    Json(#[from] serde_json::Error),
}
