// Integration tests for the record store
//
// These tests verify the snapshot persistence contract: lenient loads,
// atomic whole-list saves, and the record list mutation properties.

use anyhow::Result;
use chrono::Local;
use std::fs;
use tempfile::TempDir;
use whispers_session::{Record, RecordStore};

fn sample_records() -> Vec<Record> {
    vec![
        Record {
            logs: "🎤 first.wav recorded at 2026/08/25 09:00:00".to_string(),
            path: "/data/samples/first.wav".to_string(),
        },
        Record {
            logs: "🎤 second.wav recorded at 2026/08/25 09:05:00".to_string(),
            path: "/data/samples/second.wav".to_string(),
        },
        Record {
            logs: "🎤 third.wav recorded at 2026/08/25 09:10:00".to_string(),
            path: "/data/samples/third.wav".to_string(),
        },
    ]
}

#[test]
fn load_missing_file_returns_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("records.json"));

    let records = store.load();

    assert!(records.is_empty(), "Missing snapshot should load as empty");
    Ok(())
}

#[test]
fn load_corrupt_file_returns_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("records.json");
    fs::write(&path, "{not json at all")?;

    let store = RecordStore::new(&path);
    let records = store.load();

    assert!(records.is_empty(), "Corrupt snapshot should load as empty");
    Ok(())
}

#[test]
fn save_then_load_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("records.json"));

    let records = sample_records();
    store.save(&records).expect("save should succeed");

    let loaded = store.load();
    assert_eq!(loaded, records, "Round trip should preserve the list");
    Ok(())
}

#[test]
fn save_overwrites_previous_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("records.json"));

    let mut records = sample_records();
    store.save(&records).expect("first save should succeed");

    records.remove(0);
    store.save(&records).expect("second save should succeed");

    let loaded = store.load();
    assert_eq!(loaded.len(), 2, "Last write wins");
    assert_eq!(loaded, records);
    Ok(())
}

#[test]
fn save_leaves_no_temp_file_behind() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("records.json"));

    store.save(&sample_records()).expect("save should succeed");

    let leftovers: Vec<_> = fs::read_dir(temp_dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name != "records.json")
        .collect();

    assert!(
        leftovers.is_empty(),
        "Only the snapshot should remain, found {:?}",
        leftovers
    );
    Ok(())
}

#[test]
fn snapshot_is_a_json_array_of_logs_and_path_objects() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("records.json");
    let store = RecordStore::new(&path);

    store.save(&sample_records()).expect("save should succeed");

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let array = value.as_array().expect("snapshot should be a JSON array");
    assert_eq!(array.len(), 3);
    for entry in array {
        assert!(entry.get("logs").and_then(|v| v.as_str()).is_some());
        assert!(entry.get("path").and_then(|v| v.as_str()).is_some());
    }
    Ok(())
}

#[test]
fn new_recording_log_line_names_file_and_timestamp() {
    let created_at = Local::now();
    let record = Record::new_recording("recording_001.wav", "/tmp/recording_001.wav", created_at);

    assert!(!record.logs.is_empty(), "logs must never be empty after creation");
    assert!(record.logs.contains("recording_001.wav"));
    assert!(record
        .logs
        .contains(&created_at.format("%Y/%m/%d %H:%M:%S").to_string()));
    assert_eq!(record.path, "/tmp/recording_001.wav");
}

#[test]
fn append_result_keeps_creation_line_first() {
    let mut record = Record::new_recording("a.wav", "/tmp/a.wav", Local::now());
    let creation_line = record.logs.clone();

    record.append_result("✅ Done. \ntranscript text\n");

    assert!(record.logs.starts_with(&creation_line));
    assert!(record.logs.contains("transcript text"));
}

#[test]
fn removal_preserves_order_of_survivors() {
    let mut records = sample_records();

    records.remove(1);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].path, "/data/samples/first.wav");
    assert_eq!(records[1].path, "/data/samples/third.wav");
}

#[test]
fn append_grows_list_by_exactly_one() {
    let mut records = sample_records();
    let before = records.len();

    records.push(Record::new_recording("d.wav", "/tmp/d.wav", Local::now()));

    assert_eq!(records.len(), before + 1);
    assert_eq!(records[before].path, "/tmp/d.wav");
    assert_eq!(records[..before], sample_records()[..]);
}
