// tests/file_output.rs
use std::fs;
use std::path::PathBuf;

use kz_parse::config::options::{OutputFormat, OutputOptions};
use kz_parse::file::{path_from_text, write_output};

#[test]
fn write_creates_parent_dirs_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/result.json");

    let written = write_output(&path, "{}").unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

    write_output(&path, "{\n  \"a\": {}\n}").unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("\"a\""));
}

#[test]
fn write_into_a_file_as_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    assert!(write_output(&blocker.join("out.json"), "{}").is_err());
}

#[test]
fn typed_paths_are_trimmed_and_unquoted() {
    assert_eq!(path_from_text("   "), None);
    assert_eq!(path_from_text(r#"  "page.html" "#), Some(PathBuf::from("page.html")));
}

#[test]
fn custom_path_survives_format_change() {
    let mut out = OutputOptions::default();
    out.set_path("  mine/drops.txt ");
    out.format = OutputFormat::Tsv;
    assert!(out.has_custom_path());
    assert_eq!(out.out_path(), PathBuf::from("mine/drops.txt"));

    out.set_path("");
    assert!(!out.has_custom_path());
    assert!(out.out_path().to_string_lossy().ends_with("result.tsv"));
}
