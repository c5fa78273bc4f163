//! Teams, matches and the tournament that owns them

use rand::Rng;
use tracing::debug;

use crate::error::{LeagueError, Result};
use crate::ids::IdGenerator;
use crate::schedule::generate_schedule;
use crate::standings::{calculate_standings, top_scorers, ScorerTally, StandingsRow};

/// Name given to a tournament when none is supplied
pub const DEFAULT_TOURNAMENT_NAME: &str = "FIFA League";

/// A club entered into the league by one of the players
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// The player controlling this team
    pub owner_name: String,
}

impl Team {
    pub fn new(id: &str, name: &str, owner_name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            owner_name: owner_name.to_string(),
        }
    }
}

/// A fixture between two teams, referenced by id, plus its result once played.
///
/// `completed` is set exactly when both scores are present. Use [`Match::record`]
/// rather than writing the score fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub completed: bool,
    /// One entry per goal; a name repeats for each goal that player scored
    pub scorers: Vec<String>,
}

impl Match {
    /// An unplayed fixture
    pub fn scheduled(id: String, home_team: &str, away_team: &str) -> Self {
        Self {
            id,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: None,
            away_score: None,
            completed: false,
            scorers: Vec::new(),
        }
    }

    /// Store the final score. Recording again overwrites the previous result.
    pub fn record(&mut self, home_score: u32, away_score: u32, scorers: Vec<String>) {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.scorers = scorers;
        self.completed = true;
    }

    /// `(home, away)` goals, if the match has been played
    pub fn score(&self) -> Option<(u32, u32)> {
        if !self.completed {
            return None;
        }
        self.home_score.zip(self.away_score)
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team == team_id || self.away_team == team_id
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.completed == (self.home_score.is_some() && self.away_score.is_some())
    }
}

/// Complete league state: who plays, with which teams, and the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub name: String,
    /// Unique player names in the order they joined
    pub players: Vec<String>,
    pub teams: Vec<Team>,
    /// Schedule order; this is also the display order
    pub matches: Vec<Match>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(DEFAULT_TOURNAMENT_NAME)
    }
}

impl Tournament {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            players: Vec::new(),
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Register a player. Returns false for an empty or already known name.
    pub fn add_player(&mut self, player_name: &str) -> bool {
        if player_name.trim().is_empty() || self.players.iter().any(|p| p == player_name) {
            return false;
        }
        self.players.push(player_name.to_string());
        true
    }

    /// Enter a new team owned by `owner_name`
    pub fn add_team(
        &mut self,
        team_name: &str,
        owner_name: &str,
        ids: &mut dyn IdGenerator,
    ) -> Result<&Team> {
        if team_name.trim().is_empty() {
            return Err(LeagueError::EmptyField { field: "team name" });
        }
        if owner_name.trim().is_empty() {
            return Err(LeagueError::EmptyField { field: "owner name" });
        }

        let team = Team::new(&ids.next_id(), team_name, owner_name);
        debug!(team = %team.name, owner = %team.owner_name, id = %team.id, "added team");
        self.teams.push(team);
        Ok(&self.teams[self.teams.len() - 1])
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn get_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Replace the whole schedule with a freshly generated one
    pub fn generate_schedule<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ids: &mut dyn IdGenerator,
    ) -> &[Match] {
        self.matches = generate_schedule(&self.teams, rng, ids);
        &self.matches
    }

    /// Record the result of a scheduled match
    pub fn record_result(
        &mut self,
        match_id: &str,
        home_score: u32,
        away_score: u32,
        scorers: Vec<String>,
    ) -> Result<&Match> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| LeagueError::MatchNotFound(match_id.to_string()))?;

        m.record(home_score, away_score, scorers);
        debug!(id = %m.id, home_score, away_score, "recorded result");
        Ok(&*m)
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    pub fn pending_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| !m.completed)
    }

    pub fn completed_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.completed)
    }

    /// Percentage of the schedule already played, rounded down
    pub fn progress(&self) -> u32 {
        if self.matches.is_empty() {
            return 0;
        }
        let done = self.completed_matches().count();
        (done * 100 / self.matches.len()) as u32
    }

    pub fn standings(&self) -> Vec<StandingsRow> {
        calculate_standings(&self.teams, &self.matches)
    }

    pub fn top_scorers(&self) -> Vec<ScorerTally> {
        top_scorers(&self.matches)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
