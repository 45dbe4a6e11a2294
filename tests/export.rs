// tests/export.rs
mod common;

use std::fs;
use std::path::PathBuf;

use pr_tally::config::options::{ExportFormat, ExportType, RunOptions, TableKind, Window};
use pr_tally::runner;

use common::parse_rows;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pr_tally_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Directory holding `100.log` (3 players), `200.log` (broken), `300.log` (2 players).
fn log_dir(name: &str) -> PathBuf {
    let dir = tmp_dir(name).join("logs");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("100.log"), common::three_player_game()).unwrap();
    fs::write(dir.join("200.log"), common::broken_game()).unwrap();
    fs::write(dir.join("300.log"), common::two_player_tie()).unwrap();
    dir
}

fn column(headers: &[String], name: &str) -> usize {
    headers.iter().position(|h| h == name).unwrap()
}

#[test]
fn totals_to_stdout() {
    let opts = RunOptions { inputs: vec![log_dir("stdout")], ..Default::default() };
    let summary = runner::run(&opts, None).unwrap();

    assert_eq!(summary.games, 2);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.files_written.is_empty());

    let rows = parse_rows(summary.stdout.as_deref().unwrap(), ',');
    let headers = &rows[0];
    assert_eq!(headers[0], "game");
    assert_eq!(headers[1], "player");
    assert_eq!(headers.len(), 2 + 43 + 2);

    // 3 + 2 players
    assert_eq!(rows.len(), 1 + 5);
    let (vp, win) = (column(headers, "vp_total"), column(headers, "winner"));
    let alice = rows.iter().find(|r| r[1] == "Alice").unwrap();
    assert_eq!(alice[0], "100");
    assert_eq!(alice[vp], "6");
    assert_eq!(alice[win], "1");
    assert_eq!(alice[column(headers, "large market")], "1");
    assert!(rows.iter().filter(|r| r[0] == "300").all(|r| r[win] == "0"));
}

#[test]
fn window_and_player_filter() {
    let mut opts = RunOptions {
        inputs: vec![log_dir("window")],
        window: Window::until(3),
        players: Some(3),
        ..Default::default()
    };
    opts.export.include_headers = false;
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.games, 1);

    let rows = parse_rows(summary.stdout.as_deref().unwrap(), ',');
    assert_eq!(rows.len(), 3);
    let winners: Vec<&str> = rows.iter().filter(|r| r.last().unwrap() == "1").map(|r| r[1].as_str()).collect();
    assert_eq!(winners, vec!["Carol"]);
}

#[test]
fn ledger_to_single_tsv_file() {
    let root = tmp_dir("ledger");
    let mut opts = RunOptions {
        inputs: vec![log_dir("ledger_logs")],
        table: TableKind::Ledger,
        window: Window { start: 1, end: Some(2) },
        ..Default::default()
    };
    opts.export.format = ExportFormat::Tsv;
    opts.export.set_path(root.join("out/ledger").to_str().unwrap());

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.files_written.len(), 1);
    let path = &summary.files_written[0];
    assert!(path.to_string_lossy().ends_with("ledger.tsv"));

    let rows = parse_rows(&fs::read_to_string(path).unwrap(), '\t');
    let headers = &rows[0];
    assert_eq!(&headers[..5], ["game", "turn", "role_player", "role", "player"]);
    // turn 1 only: 3 players of game 100 + 2 of game 300
    assert_eq!(rows.len(), 1 + 5);
    let bob = rows.iter().find(|r| r[0] == "100" && r[4] == "Bob").unwrap();
    assert_eq!(bob[1], "1");
    assert_eq!((bob[2].as_str(), bob[3].as_str()), ("Bob", "builder"));
    assert_eq!(bob[column(headers, "builder")], "1");
    assert_eq!(bob[column(headers, "dblns")], "-1");
}

#[test]
fn per_game_csv_files() {
    let out = tmp_dir("per_game_csv").join("reports");
    let mut opts = RunOptions { inputs: vec![log_dir("per_game_csv_logs")], ..Default::default() };
    opts.export.export_type = ExportType::PerGame;
    opts.export.set_path(out.to_str().unwrap());

    let summary = runner::run(&opts, None).unwrap();
    let mut names: Vec<String> = summary
        .files_written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["100.csv", "300.csv"]);

    let rows = parse_rows(&fs::read_to_string(out.join("300.csv")).unwrap(), ',');
    assert_eq!(rows.len(), 1 + 2);
    assert_eq!(rows[0][0], "game");
}

#[test]
fn per_game_json_documents() {
    let out = tmp_dir("per_game_json").join("json");
    let mut opts = RunOptions { inputs: vec![log_dir("per_game_json_logs")], ..Default::default() };
    opts.export.format = ExportFormat::Json;
    opts.export.export_type = ExportType::PerGame;
    opts.export.set_path(out.to_str().unwrap());

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.files_written.len(), 2);

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("100.json")).unwrap()).unwrap();
    let game = &doc[0];
    assert_eq!(game["id"], "100");
    assert_eq!(game["turns"], 6);
    assert_eq!(game["window"], serde_json::json!([0, 6]));
    assert_eq!(game["winner"], "Alice");
    assert_eq!(game["vp"]["Carol"], 4);
    assert_eq!(game["totals"]["Bob"]["colonists"], 2);
    assert!(game.get("ledger").is_none());

    let tie: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("300.json")).unwrap()).unwrap();
    assert!(tie[0]["winner"].is_null());
}

#[test]
fn json_ledger_to_stdout() {
    let mut opts = RunOptions {
        inputs: vec![log_dir("json_ledger")],
        table: TableKind::Ledger,
        players: Some(2),
        ..Default::default()
    };
    opts.export.format = ExportFormat::Json;

    let summary = runner::run(&opts, None).unwrap();
    let doc: serde_json::Value = serde_json::from_str(summary.stdout.as_deref().unwrap()).unwrap();
    assert_eq!(doc.as_array().unwrap().len(), 1);
    let ledger = doc[0]["ledger"].as_array().unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[1]["role_player"], "Eve");
    assert_eq!(ledger[1]["role"], "trader");
    assert_eq!(ledger[1]["rows"][1][0], "Eve");
    assert_eq!(ledger[1]["rows"][1][1]["dblns"], 1);
}

#[test]
fn no_logs_is_not_an_error() {
    let opts = RunOptions { inputs: vec![tmp_dir("empty")], ..Default::default() };
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.games, 0);
    assert!(summary.stdout.is_none());
}
