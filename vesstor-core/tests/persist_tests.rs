// Tests for result persistence

use std::fs;
use tempfile::TempDir;
use url::Url;
use vesstor_core::persist::{ResultWriter, file_stem};
use vesstor_scanner::ResultSnapshot;

fn snapshot(target: &str, results: &[&str]) -> ResultSnapshot {
    ResultSnapshot {
        tool: "VesstoR".to_string(),
        version: "7.0.0".to_string(),
        target: target.to_string(),
        mode: "default".to_string(),
        threads: 10,
        delay: 0.1,
        total_found: results.len(),
        results: results.iter().map(|s| s.to_string()).collect(),
        timestamp: "2026-10-18 12:00:00".to_string(),
    }
}

#[test]
fn test_file_stem_uses_host() {
    let url = Url::parse("http://example.com/app/").unwrap();
    assert_eq!(file_stem(&url), "VesstoR_example.com");
}

#[test]
fn test_file_stem_keeps_explicit_port() {
    let url = Url::parse("http://127.0.0.1:8080").unwrap();
    assert_eq!(file_stem(&url), "VesstoR_127.0.0.1:8080");
}

#[test]
fn test_write_creates_directory_and_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("nested").join("VesstoR_Results");
    let writer = ResultWriter::new(&out);

    let snap = snapshot(
        "http://example.com/",
        &["http://example.com/login/", "http://example.com/backup/"],
    );
    let paths = writer.write(&snap).unwrap();

    assert_eq!(paths.json, out.join("VesstoR_example.com.json"));
    assert_eq!(paths.text, out.join("VesstoR_example.com.txt"));

    let text = fs::read_to_string(&paths.text).unwrap();
    assert_eq!(text, "http://example.com/login/\nhttp://example.com/backup/\n");

    let loaded = ResultWriter::load(&paths.json).unwrap();
    assert_eq!(loaded, snap);
}

#[test]
fn test_json_layout() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ResultWriter::new(temp_dir.path());
    let paths = writer
        .write(&snapshot("http://example.com/", &["http://example.com/admin/"]))
        .unwrap();

    let raw = fs::read_to_string(&paths.json).unwrap();
    // Four-space indentation.
    assert!(raw.contains("\n    \"tool\": \"VesstoR\""));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for key in [
        "tool",
        "version",
        "target",
        "mode",
        "threads",
        "delay",
        "total_found",
        "results",
        "timestamp",
    ] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(value["total_found"], 1);
    assert_eq!(value["results"][0], "http://example.com/admin/");
}

#[test]
fn test_empty_snapshot_still_writes_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ResultWriter::new(temp_dir.path());
    let paths = writer.write(&snapshot("http://example.com/", &[])).unwrap();

    assert_eq!(fs::read_to_string(&paths.text).unwrap(), "");
    let loaded = ResultWriter::load(&paths.json).unwrap();
    assert_eq!(loaded.total_found, 0);
    assert!(loaded.results.is_empty());
}

#[test]
fn test_rewrite_same_host_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ResultWriter::new(temp_dir.path());

    writer
        .write(&snapshot("http://example.com/", &["http://example.com/a/", "http://example.com/b/"]))
        .unwrap();
    let paths = writer
        .write(&snapshot("http://example.com/", &["http://example.com/c/"]))
        .unwrap();

    assert_eq!(fs::read_to_string(&paths.text).unwrap(), "http://example.com/c/\n");
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_write_to_unwritable_location_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, "file").unwrap();

    let writer = ResultWriter::new(blocker.join("out"));
    assert!(writer.write(&snapshot("http://example.com/", &[])).is_err());
}
