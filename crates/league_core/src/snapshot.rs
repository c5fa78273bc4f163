//! Serializable snapshot of a tournament
//!
//! Matches refer to teams by id. Loading a snapshot keeps the match order, drops
//! matches whose teams cannot be found, and rejects matches whose `completed`
//! flag disagrees with their scores.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LeagueError, Result};
use crate::model::{Match, Team, Tournament, DEFAULT_TOURNAMENT_NAME};

/// Tournament in its stored form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

/// Match in its stored form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub scorers: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_TOURNAMENT_NAME.to_string()
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            home_team_id: m.home_team.clone(),
            away_team_id: m.away_team.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
            completed: m.completed,
            scorers: m.scorers.clone(),
        }
    }
}

impl From<MatchRecord> for Match {
    fn from(record: MatchRecord) -> Self {
        Self {
            id: record.id,
            home_team: record.home_team_id,
            away_team: record.away_team_id,
            home_score: record.home_score,
            away_score: record.away_score,
            completed: record.completed,
            scorers: record.scorers,
        }
    }
}

impl Tournament {
    pub fn to_record(&self) -> TournamentRecord {
        TournamentRecord {
            name: self.name.clone(),
            players: self.players.clone(),
            teams: self.teams.clone(),
            matches: self.matches.iter().map(MatchRecord::from).collect(),
        }
    }

    /// Rebuild a tournament from its stored form
    pub fn from_record(record: TournamentRecord) -> Result<Self> {
        let mut tournament = Tournament::new(&record.name);
        for player in &record.players {
            tournament.add_player(player);
        }
        tournament.teams = record.teams;

        for m in record.matches.into_iter().map(Match::from) {
            let resolved =
                tournament.team(&m.home_team).is_some() && tournament.team(&m.away_team).is_some();
            if !resolved {
                warn!(id = %m.id, "dropping match that refers to an unknown team");
                continue;
            }
            if !m.is_consistent() {
                return Err(LeagueError::InconsistentMatch { id: m.id });
            }
            tournament.matches.push(m);
        }

        Ok(tournament)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let record: TournamentRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }
}
