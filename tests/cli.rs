// tests/cli.rs
#![cfg(feature = "cli")]
mod common;

use std::fs;

use clap::Parser;
use common::{node_table, page, project_table};
use kz_parse::cli::{self, Action, Cli};
use kz_parse::runner::Command;

fn write_page(dir: &std::path::Path) -> std::path::PathBuf {
    let html = page(&[
        ("主線關卡", true, String::new()),
        ("海岸", false, node_table("海岸 初級", &[("淡水", "3", "12.5%")])),
        ("開拓計畫", false, project_table("開拓計畫 1 A", "木材", "10")),
    ]);
    let path = dir.join("event.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn run_accepts_names_and_labels() {
    let cli = Cli::try_parse_from(["cli", "run", "Summer 1 Farming", "-i", "p.html", "-f", "tsv", "--headers"]).unwrap();
    let Action::Run { command, headers, .. } = cli.command else { panic!("expected run") };
    assert_eq!(command, Command::Summer1Farming);
    assert!(headers);

    assert!(Cli::try_parse_from(["cli", "run", "summer9", "-i", "p.html"]).is_err());
}

#[test]
fn run_writes_json_to_out_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(dir.path());
    let out = dir.path().join("out/drops.json");

    let cli = Cli::try_parse_from([
        "cli", "run", "summer1-farming",
        "-i", input.to_str().unwrap(),
        "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["coast beginner"]["water"]["initial"], 0.375);
    assert_eq!(json["coast beginner"]["water"]["stacks"], 0.125);
}

#[test]
fn run_projects_as_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(dir.path());
    let out = dir.path().join("projects.tsv");

    let cli = Cli::try_parse_from([
        "cli", "run", "summer1-projects", "--format", "tsv",
        "-i", input.to_str().unwrap(),
        "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Project 1 A\twood\t10\n");
}

#[test]
fn missing_page_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from([
        "cli", "run", "collapse-all", "-i", dir.path().join("nope.html").to_str().unwrap(),
    ]).unwrap();
    assert!(cli::run(cli).is_err());
}

#[test]
fn import_tsv_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("drops.tsv");
    fs::write(&sheet, "water\nCoast\t0.5\t0.75\n").unwrap();
    let out = dir.path().join("drops.json");

    let cli = Cli::try_parse_from([
        "cli", "import-tsv", sheet.to_str().unwrap(), "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["coast"]["water"]["stacks"], 0.25);
}

#[test]
fn custom_table_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(dir.path());
    let table = dir.path().join("table.json");
    fs::write(&table, r#"[["海岸", "shore"], ["初級", "1"], ["淡水", "water"]]"#).unwrap();
    let out = dir.path().join("drops.json");

    let cli = Cli::try_parse_from([
        "cli", "run", "summer1-farming",
        "-i", input.to_str().unwrap(),
        "-t", table.to_str().unwrap(),
        "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(json.get("shore 1").is_some(), "{json}");
}

#[test]
fn run_with_bonus_prints_expected_items() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(dir.path());
    let out = dir.path().join("expected.json");

    let cli = Cli::try_parse_from([
        "cli", "run", "summer1-farming",
        "-i", input.to_str().unwrap(),
        "-b", "water=2",
        "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    // 0.375 + 2 * 0.125
    assert_eq!(json["coast beginner"]["water"], 0.625);
}

#[test]
fn eval_reads_farming_json() {
    let dir = tempfile::tempdir().unwrap();
    let drops = dir.path().join("drops.json");
    fs::write(&drops, r#"{"coast": {"water": {"initial": 0.5, "stacks": 0.25}}}"#).unwrap();
    let out = dir.path().join("eval.tsv");

    let cli = Cli::try_parse_from([
        "cli", "eval", drops.to_str().unwrap(),
        "--bonus", "water=2", "--format", "tsv", "--headers",
        "-o", out.to_str().unwrap(),
    ]).unwrap();
    cli::run(cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Node\tResource\tExpected\ncoast\twater\t1\n");
}

#[test]
fn malformed_bonus_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_page(dir.path());
    let cli = Cli::try_parse_from([
        "cli", "run", "summer1-farming", "-i", input.to_str().unwrap(), "-b", "water",
    ]).unwrap();
    assert!(cli::run(cli).is_err());
}
