//! League table and top scorer aggregation

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

use crate::model::{Match, Team};

/// Points for a win
pub const WIN_POINTS: u32 = 3;

/// Points for a draw
pub const DRAW_POINTS: u32 = 1;

/// One line of the league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: String,
    pub name: String,
    pub owner: String,
    #[serde(rename = "GP")]
    pub played: u32,
    #[serde(rename = "W")]
    pub won: u32,
    #[serde(rename = "D")]
    pub drawn: u32,
    #[serde(rename = "L")]
    pub lost: u32,
    #[serde(rename = "GF")]
    pub goals_for: u64,
    #[serde(rename = "GA")]
    pub goals_against: u64,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "Pts")]
    pub points: u32,
}

impl StandingsRow {
    fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            owner: team.owner_name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Fold in one played match from this team's point of view
    fn add_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        // u64 totals so single u32 scores cannot overflow a season
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += WIN_POINTS;
            }
            Ordering::Less => self.lost += 1,
            Ordering::Equal => {
                self.drawn += 1;
                self.points += DRAW_POINTS;
            }
        }
    }

    /// Ranking key: points, then goal difference, then goals scored
    pub fn ranking_key(&self) -> (u32, i64, u64) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

/// Goals credited to one scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerTally {
    pub name: String,
    pub goals: u32,
}

/// Build the league table from completed matches.
///
/// Every team gets a row, including teams that have not played. Rows are ranked
/// by [`StandingsRow::ranking_key`], highest first; teams that stay level keep
/// their order in `teams`.
pub fn calculate_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams.iter().map(StandingsRow::new).collect();
    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id.as_str(), i))
        .collect();

    for m in matches.iter().filter(|m| m.completed) {
        let Some((home_score, away_score)) = m.score() else {
            warn!(id = %m.id, "skipping completed match without a score");
            continue;
        };

        let (Some(&home), Some(&away)) = (
            index.get(m.home_team.as_str()),
            index.get(m.away_team.as_str()),
        ) else {
            warn!(
                id = %m.id,
                home = %m.home_team,
                away = %m.away_team,
                "skipping match with unknown team"
            );
            continue;
        };

        rows[home].add_result(home_score, away_score);
        rows[away].add_result(away_score, home_score);
    }

    // sort_by is stable, so level teams stay in insertion order
    rows.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
    rows
}

/// Count goals per scorer across all matches, most goals first.
///
/// Each entry in a match's scorer list is one goal. Matches are not filtered on
/// `completed`. Players level on goals keep the order in which they first scored.
pub fn top_scorers(matches: &[Match]) -> Vec<ScorerTally> {
    let mut tallies: Vec<ScorerTally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for scorer in matches.iter().flat_map(|m| &m.scorers) {
        match index.get(scorer.as_str()) {
            Some(&i) => tallies[i].goals += 1,
            None => {
                index.insert(scorer.as_str(), tallies.len());
                tallies.push(ScorerTally {
                    name: scorer.clone(),
                    goals: 1,
                });
            }
        }
    }

    tallies.sort_by(|a, b| b.goals.cmp(&a.goals));
    tallies
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
