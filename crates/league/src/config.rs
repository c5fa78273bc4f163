//! `league.toml` configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use league_core::{DEFAULT_DATA_FILE, DEFAULT_TOURNAMENT_NAME};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "league.toml";

/// Settings for the command line tool. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Where the tournament is kept between runs
    pub data_file: PathBuf,
    /// Name for a tournament started from scratch
    pub tournament_name: String,
    /// How many scorers `scorers` and the text export show
    pub top_scorers: usize,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            tournament_name: DEFAULT_TOURNAMENT_NAME.to_string(),
            top_scorers: 10,
            log_level: "warn".to_string(),
        }
    }
}

impl LeagueConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Use `explicit` if given (it must exist), else `league.toml` if present,
    /// else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
