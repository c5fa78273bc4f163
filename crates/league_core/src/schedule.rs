//! Double round-robin schedule generation
//!
//! A schedule is built in three phases:
//! 1. Pairing: every ordered pair of teams with different owners becomes a fixture,
//!    so each cross-owner pairing is played twice with home and away swapped.
//! 2. Shuffling: the fixtures are put into a uniformly random order.
//! 3. Spacing: a greedy pass reorders the fixtures so that the same player is
//!    rarely asked to play twice in a row.
//!
//! The spacing pass only looks [`LOOKAHEAD_WINDOW`] fixtures ahead and is not
//! optimal. It will place back-to-back fixtures for one owner when nothing better
//! is in reach, for example when only one player's fixtures are left.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::ids::IdGenerator;
use crate::model::{Match, Team};

/// How many upcoming fixtures the spacing pass considers at each step
pub const LOOKAHEAD_WINDOW: usize = 10;

/// A pairing of two teams before it is turned into a [`Match`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture<'a> {
    pub home: &'a Team,
    pub away: &'a Team,
}

impl<'a> Fixture<'a> {
    pub fn new(home: &'a Team, away: &'a Team) -> Self {
        Self { home, away }
    }

    /// How many of this fixture's two owners also played in `previous` (0, 1 or 2)
    pub fn penalty(&self, previous: &Fixture<'_>) -> u8 {
        let previous_owners = [
            previous.home.owner_name.as_str(),
            previous.away.owner_name.as_str(),
        ];
        [self.home, self.away]
            .iter()
            .filter(|team| previous_owners.contains(&team.owner_name.as_str()))
            .count() as u8
    }
}

/// Generate a full schedule for `teams`.
///
/// Returns an empty schedule for fewer than two teams. Duplicate team ids are not
/// detected. Every returned match gets a fresh id from `ids` and has no score.
pub fn generate_schedule<R: Rng + ?Sized>(
    teams: &[Team],
    rng: &mut R,
    ids: &mut dyn IdGenerator,
) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut fixtures = pair_fixtures(teams);
    fixtures.shuffle(rng);
    let ordered = space_fixtures(fixtures);

    debug!(
        teams = teams.len(),
        fixtures = ordered.len(),
        "generated schedule"
    );

    ordered
        .into_iter()
        .map(|f| Match::scheduled(ids.next_id(), &f.home.id, &f.away.id))
        .collect()
}

/// Every ordered `(home, away)` pair of teams owned by different players, in team order
pub fn pair_fixtures(teams: &[Team]) -> Vec<Fixture<'_>> {
    let mut fixtures = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i != j && home.owner_name != away.owner_name {
                fixtures.push(Fixture::new(home, away));
            }
        }
    }
    fixtures
}

/// Reorder fixtures so consecutive ones avoid sharing an owner where the
/// lookahead window allows it. The first fixture always stays first.
pub fn space_fixtures(fixtures: Vec<Fixture<'_>>) -> Vec<Fixture<'_>> {
    let mut remaining: VecDeque<_> = fixtures.into();
    let mut ordered = Vec::with_capacity(remaining.len());

    let Some(mut last) = remaining.pop_front() else {
        return ordered;
    };
    ordered.push(last);

    while let Some(next) = remaining.remove(next_index(&remaining, &last)) {
        ordered.push(next);
        last = next;
    }

    ordered
}

/// Index of the fixture to place after `last`: the first zero-penalty fixture in the
/// window, otherwise the first one with the lowest penalty.
fn next_index(remaining: &VecDeque<Fixture<'_>>, last: &Fixture<'_>) -> usize {
    let mut best_idx = 0;
    let mut best_penalty = u8::MAX;

    for (idx, candidate) in remaining.iter().take(LOOKAHEAD_WINDOW).enumerate() {
        let penalty = candidate.penalty(last);
        if penalty == 0 {
            return idx;
        }
        if penalty < best_penalty {
            best_penalty = penalty;
            best_idx = idx;
        }
    }

    best_idx
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
