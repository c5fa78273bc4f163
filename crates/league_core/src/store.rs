//! JSON file storage for a single tournament

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LeagueError, Result};
use crate::model::Tournament;

/// Data file used when no other path is configured
pub const DEFAULT_DATA_FILE: &str = "tournament_data.json";

/// Keeps one tournament in a JSON file
#[derive(Debug, Clone)]
pub struct TournamentStore {
    path: PathBuf,
}

impl Default for TournamentStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl TournamentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored tournament, or `None` if nothing has been saved yet
    pub fn load(&self) -> Result<Option<Tournament>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved tournament");
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };
        Tournament::from_json(&contents).map(Some)
    }

    /// Save the tournament, replacing any previous contents
    pub fn save(&self, tournament: &Tournament) -> Result<()> {
        let json = tournament.to_json()?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(
            path = %self.path.display(),
            teams = tournament.teams.len(),
            matches = tournament.matches.len(),
            "saved tournament"
        );
        Ok(())
    }

    /// Delete the data file. Succeeds if there is nothing to delete.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "removed tournament data");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> LeagueError {
        LeagueError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
