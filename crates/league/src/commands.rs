//! Command execution against the stored tournament

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use league_core::{
    fixture_label, standings_report, LeagueError, Match, Tournament, TournamentStore,
    UuidGenerator,
};

use crate::cli::{Cli, Command};
use crate::config::LeagueConfig;

/// Parse a score typed by a user. Only non-negative integers are accepted.
pub fn parse_score(input: &str) -> Result<u32, LeagueError> {
    input
        .trim()
        .parse()
        .map_err(|_| LeagueError::InvalidScore(input.to_string()))
}

/// Split a comma separated scorer list, dropping blank entries
pub fn parse_scorers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run one command, writing its output to `out`
pub fn run(cli: Cli, config: LeagueConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let data_file = cli.data.unwrap_or_else(|| config.data_file.clone());
    let store = TournamentStore::new(data_file);

    match cli.command {
        Command::Reset => {
            store.reset()?;
            writeln!(out, "Tournament reset")?;
        }
        Command::Import { file } => {
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let tournament = Tournament::from_json(&contents)
                .with_context(|| format!("failed to import {}", file.display()))?;
            store.save(&tournament)?;
            info!(path = %file.display(), "imported tournament");
            writeln!(
                out,
                "Imported {}: {} teams, {} matches",
                tournament.name,
                tournament.teams.len(),
                tournament.matches.len()
            )?;
        }
        command => {
            let mut tournament = store
                .load()
                .with_context(|| format!("failed to load {}", store.path().display()))?
                .unwrap_or_else(|| Tournament::new(&config.tournament_name));

            if apply(command, &mut tournament, &config, out)? {
                store.save(&tournament)?;
            }
        }
    }

    Ok(())
}

/// Apply a command to the loaded tournament. Returns whether it changed.
fn apply(
    command: Command,
    tournament: &mut Tournament,
    config: &LeagueConfig,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    match command {
        Command::AddPlayer { name } => {
            if tournament.add_player(&name) {
                writeln!(out, "Added player {}", name)?;
                Ok(true)
            } else {
                writeln!(out, "Player {:?} ignored (blank or already registered)", name)?;
                Ok(false)
            }
        }
        Command::AddTeam { name, owner } => {
            if tournament.add_player(&owner) {
                info!(player = %owner, "registered owner as player");
            }
            let team = tournament.add_team(&name, &owner, &mut UuidGenerator)?;
            writeln!(out, "Added {} ({}) as {}", team.name, team.owner_name, team.id)?;
            Ok(true)
        }
        Command::Teams => {
            show_teams(tournament, out)?;
            Ok(false)
        }
        Command::Generate { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if tournament.teams.len() < 2 {
                warn!(teams = tournament.teams.len(), "not enough teams for a schedule");
            }
            let fixtures = tournament
                .generate_schedule(&mut rng, &mut UuidGenerator)
                .len();
            writeln!(out, "Generated {} fixtures", fixtures)?;
            Ok(true)
        }
        Command::Record {
            match_id,
            home,
            away,
            scorers,
        } => {
            let home = parse_score(&home)?;
            let away = parse_score(&away)?;
            tournament.record_result(&match_id, home, away, parse_scorers(&scorers))?;
            if let Some(m) = tournament.get_match(&match_id) {
                writeln!(out, "Recorded {}", fixture_label(tournament, m))?;
            }
            Ok(true)
        }
        Command::Matches {
            pending,
            completed,
            team,
        } => {
            let mut list: Vec<&Match> = if pending {
                tournament.pending_matches().collect()
            } else if completed {
                let mut played: Vec<&Match> = tournament.completed_matches().collect();
                played.reverse();
                played
            } else {
                tournament.matches.iter().collect()
            };
            if let Some(team) = &team {
                list.retain(|m| m.involves(team));
            }

            writeln!(out, "Progress: {}%", tournament.progress())?;
            for (n, m) in list.iter().enumerate() {
                writeln!(out, "{:>3}. {}  {}", n + 1, m.id, fixture_label(tournament, m))?;
            }
            Ok(false)
        }
        Command::Standings { json } => {
            if json {
                let rows = tournament.standings();
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                write!(out, "{}", standings_report(tournament, 0))?;
                writeln!(out, "\nProgress: {}%", tournament.progress())?;
            }
            Ok(false)
        }
        Command::Scorers { limit } => {
            let limit = limit.unwrap_or(config.top_scorers);
            for (n, tally) in tournament.top_scorers().iter().take(limit).enumerate() {
                writeln!(out, "{:>3}. {:<24} {:>3}", n + 1, tally.name, tally.goals)?;
            }
            Ok(false)
        }
        Command::ExportJson { out: path } => {
            emit(out, path.as_deref(), &tournament.to_json()?)?;
            Ok(false)
        }
        Command::ExportTxt { out: path } => {
            emit(out, path.as_deref(), &standings_report(tournament, config.top_scorers))?;
            Ok(false)
        }
        // Handled by `run` without loading
        Command::Reset | Command::Import { .. } => Ok(false),
    }
}

fn show_teams(tournament: &Tournament, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{}", tournament.name)?;
    writeln!(out, "Players: {}", tournament.players.join(", "))?;
    for team in &tournament.teams {
        writeln!(out, "  {:<36} {:<20} {}", team.id, team.name, team.owner_name)?;
    }
    Ok(())
}

/// Write `text` to `path`, or to `out` when no path is given
fn emit(out: &mut dyn Write, path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => writeln!(out, "{}", text)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
