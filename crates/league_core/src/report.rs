//! Plain-text rendering of league tables and fixtures

use std::fmt::Write;

use crate::model::{Match, Tournament};

/// One-line description of a match, e.g. `Arsenal (Alice) 2-1 Chelsea (Bob)`.
///
/// Unknown team ids are shown as `?`.
pub fn fixture_label(tournament: &Tournament, m: &Match) -> String {
    let side = |team_id: &str| match tournament.team(team_id) {
        Some(team) => format!("{} ({})", team.name, team.owner_name),
        None => "?".to_string(),
    };
    let result = match m.score() {
        Some((home, away)) => format!("{}-{}", home, away),
        None => "vs".to_string(),
    };
    format!("{} {} {}", side(&m.home_team), result, side(&m.away_team))
}

/// Text export of the standings followed by the leading scorers
pub fn standings_report(tournament: &Tournament, scorer_limit: usize) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "--- {} Standings ---\n", tournament.name);
    let _ = writeln!(
        report,
        "{:<4} {:<20} {:<15} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
        "#", "Team", "Owner", "GP", "W", "D", "L", "GD", "Pts"
    );
    report.push_str(&"-".repeat(66));
    report.push('\n');

    for (pos, row) in tournament.standings().iter().enumerate() {
        let _ = writeln!(
            report,
            "{:<4} {:<20} {:<15} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
            pos + 1,
            row.name,
            row.owner,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goal_difference,
            row.points
        );
    }

    let scorers = tournament.top_scorers();
    if !scorers.is_empty() && scorer_limit > 0 {
        report.push_str("\nTop scorers:\n");
        for tally in scorers.iter().take(scorer_limit) {
            let _ = writeln!(report, "  {:<24} {:>3}", tally.name, tally.goals);
        }
    }

    report
}
