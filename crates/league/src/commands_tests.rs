use super::*;
use clap::Parser;
use league_core::TournamentStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Runs commands against a data file in a scratch directory
struct Harness {
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data(&self) -> PathBuf {
        self.dir.path().join("league.json")
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let data = self.data();
        let mut argv = vec!["league", "--data", data.to_str().unwrap()];
        argv.extend_from_slice(args);

        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(cli, LeagueConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn tournament(&self) -> Tournament {
        TournamentStore::new(self.data())
            .load()
            .unwrap()
            .expect("tournament saved")
    }

    fn with_schedule(&self) -> Tournament {
        self.run(&["add-team", "Arsenal", "--owner", "Alice"]).unwrap();
        self.run(&["add-team", "Chelsea", "--owner", "Bob"]).unwrap();
        self.run(&["add-team", "Everton", "--owner", "Carol"]).unwrap();
        self.run(&["generate", "--seed", "1"]).unwrap();
        self.tournament()
    }
}

#[test]
fn test_parse_score() {
    assert_eq!(parse_score("3").unwrap(), 3);
    assert_eq!(parse_score(" 0 ").unwrap(), 0);
    for bad in ["-1", "1.5", "two", ""] {
        assert!(
            matches!(parse_score(bad), Err(LeagueError::InvalidScore(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_scorers() {
    assert_eq!(
        parse_scorers("Saka, Saka ,Palmer"),
        vec!["Saka", "Saka", "Palmer"]
    );
    assert_eq!(parse_scorers("Kane,,  ,Son"), vec!["Kane", "Son"]);
    assert!(parse_scorers("").is_empty());
}

#[test]
fn test_read_only_commands_do_not_create_data() {
    let h = Harness::new();

    let output = h.run(&["standings"]).unwrap();
    assert!(output.contains("--- FIFA League Standings ---"));
    assert!(!h.data().exists());
}

#[test]
fn test_add_team_registers_owner() {
    let h = Harness::new();
    h.run(&["add-player", "Alice"]).unwrap();
    h.run(&["add-team", "Arsenal", "--owner", "Alice"]).unwrap();
    h.run(&["add-team", "Chelsea", "--owner", "Bob"]).unwrap();

    let t = h.tournament();
    assert_eq!(t.players, vec!["Alice", "Bob"]);
    assert_eq!(t.teams.len(), 2);
    assert_eq!(t.teams[1].owner_name, "Bob");
}

#[test]
fn test_add_team_rejects_blank_name() {
    let h = Harness::new();

    let err = h.run(&["add-team", " ", "--owner", "Alice"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LeagueError>(),
        Some(LeagueError::EmptyField { .. })
    ));
}

#[test]
fn test_generate_and_record() {
    let h = Harness::new();
    let t = h.with_schedule();
    assert_eq!(t.matches.len(), 6);

    let id = t.matches[0].id.clone();
    let output = h
        .run(&["record", id.as_str(), "2", "1", "--scorers", "Saka, Saka"])
        .unwrap();
    assert!(output.starts_with("Recorded "));
    assert!(output.contains("2-1"));

    let t = h.tournament();
    assert_eq!(t.matches[0].score(), Some((2, 1)));
    assert_eq!(t.progress(), 16);

    let json = h.run(&["standings", "--json"]).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(rows[0]["Pts"], 3);
    assert_eq!(rows.as_array().unwrap().len(), 3);

    let scorers = h.run(&["scorers"]).unwrap();
    assert!(scorers.contains("Saka"));
    assert!(scorers.contains(" 2"));
}

#[test]
fn test_same_seed_same_fixture_order() {
    let first = Harness::new().with_schedule();
    let second = Harness::new().with_schedule();

    let names = |t: &Tournament| -> Vec<String> {
        t.matches
            .iter()
            .map(|m| fixture_label(t, m))
            .collect()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_negative_score_is_rejected() {
    let h = Harness::new();
    let t = h.with_schedule();

    let err = h
        .run(&["record", t.matches[0].id.as_str(), "-1", "0"])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LeagueError>(),
        Some(LeagueError::InvalidScore(s)) if s == "-1"
    ));
    assert_eq!(h.tournament().completed_matches().count(), 0);
}

#[test]
fn test_unknown_match_is_rejected() {
    let h = Harness::new();
    h.with_schedule();

    let err = h.run(&["record", "missing", "1", "0"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LeagueError>(),
        Some(LeagueError::MatchNotFound(_))
    ));
}

#[test]
fn test_completed_matches_most_recent_first() {
    let h = Harness::new();
    let t = h.with_schedule();
    h.run(&["record", t.matches[0].id.as_str(), "1", "0"]).unwrap();
    h.run(&["record", t.matches[3].id.as_str(), "0", "0"]).unwrap();

    let output = h.run(&["matches", "--completed"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Progress: 33%");
    assert!(lines[1].contains(&t.matches[3].id));
    assert!(lines[2].contains(&t.matches[0].id));
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_matches_filtered_by_team() {
    let h = Harness::new();
    let t = h.with_schedule();
    let team = t.teams[0].id.clone();

    let output = h.run(&["matches", "--team", team.as_str()]).unwrap();
    // Header plus four fixtures for one team in a three-team league
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_export_reset_import() {
    let h = Harness::new();
    let before = h.with_schedule();
    let snapshot = h.dir.path().join("backup.json");
    let snapshot_arg = snapshot.to_str().unwrap();

    h.run(&["export-json", "--out", snapshot_arg]).unwrap();
    h.run(&["reset"]).unwrap();
    assert!(!h.data().exists());

    let output = h.run(&["import", snapshot_arg]).unwrap();
    assert!(output.contains("3 teams, 6 matches"));
    assert_eq!(h.tournament(), before);
}

#[test]
fn test_export_txt_to_stdout() {
    let h = Harness::new();
    h.with_schedule();

    let output = h.run(&["export-txt"]).unwrap();
    assert!(output.starts_with("--- FIFA League Standings ---"));
    assert!(output.contains("Arsenal"));
}

#[test]
fn test_import_bad_file_fails() {
    let h = Harness::new();
    let bad = h.dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();

    assert!(h.run(&["import", bad.to_str().unwrap()]).is_err());
    assert!(!h.data().exists());
}
