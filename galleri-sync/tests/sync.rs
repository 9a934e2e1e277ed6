use std::fs;

use chrono::{TimeZone, Utc};
use galleri_sync::{RowSource, SkipReason, SyncError, SyncOutcome, SyncRequest, run_sync_at};
use tempfile::TempDir;

const SHEET_CSV: &str = "\
id,name,description,category,price,size,type,colors,images,available,featured,dateAdded,variants
kar001,Blå Katt,Akvarell,Djur,1200,30x40 cm,Original,\"Blå, vit\",\"kar001,kar001-2\",true,true,2024-04-01,
,Röd Räv,,Djur,,\"A4, A3\",Print,röd,,0,,,\"Liten, Stor\"
kar003,,Utan namn,,,,,,,,,,
";

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
}

fn request(dir: &TempDir, csv: &str, dry_run: bool) -> SyncRequest {
    let csv_path = dir.path().join("sheet.csv");
    fs::write(&csv_path, csv).unwrap();
    SyncRequest {
        source: Some(RowSource::Csv(csv_path)),
        output: dir.path().join("data").join("inventory.json"),
        dry_run,
    }
}

#[test]
fn csv_sync_writes_inventory_document() {
    let dir = TempDir::new().unwrap();
    let req = request(&dir, SHEET_CSV, false);

    let outcome = run_sync_at(&req, now()).unwrap();
    match outcome {
        SyncOutcome::Written { rows, items, .. } => {
            assert_eq!(rows, 4);
            assert_eq!(items, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&req.output).unwrap()).unwrap();
    assert_eq!(doc["lastUpdated"], "2024-06-01T12:30:00.000Z");

    let items = doc["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], "kar001");
    assert_eq!(items[0]["image"], "kar001");
    assert_eq!(items[0]["colors"], serde_json::json!(["blå", "vit"]));
    assert_eq!(items[0]["featured"], true);

    assert_eq!(items[1]["id"], "rod-rav");
    assert_eq!(items[1]["images"], serde_json::json!(["rod-rav"]));
    assert_eq!(items[1]["type"], "Print");
    assert_eq!(items[1]["available"], false);
    assert_eq!(items[1]["price"], serde_json::Value::Null);
    assert_eq!(items[1]["dateAdded"], "2024-06-01");
    assert_eq!(items[1]["variants"], serde_json::json!(["Liten", "Stor"]));
}

#[test]
fn dry_run_leaves_output_alone() {
    let dir = TempDir::new().unwrap();
    let req = request(&dir, SHEET_CSV, true);

    let outcome = run_sync_at(&req, now()).unwrap();
    let SyncOutcome::DryRun { document, .. } = outcome else {
        panic!("expected dry run");
    };
    assert_eq!(document.items.len(), 2);
    assert!(!req.output.exists());
}

#[test]
fn missing_source_is_skipped() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.json");
    fs::write(&output, "previous").unwrap();

    let req = SyncRequest {
        source: None,
        output: output.clone(),
        dry_run: false,
    };
    let outcome = run_sync_at(&req, now()).unwrap();
    assert!(matches!(outcome, SyncOutcome::Skipped(SkipReason::NoSource)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn empty_sheet_is_skipped() {
    let dir = TempDir::new().unwrap();
    let req = request(&dir, "", false);
    let outcome = run_sync_at(&req, now()).unwrap();
    assert!(matches!(outcome, SyncOutcome::Skipped(SkipReason::NoRows)));
    assert!(!req.output.exists());
}

#[test]
fn sheet_without_valid_rows_fails_and_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let req = request(&dir, "id,name\nkar001,\n,\n", false);
    fs::create_dir_all(req.output.parent().unwrap()).unwrap();
    fs::write(&req.output, "previous").unwrap();

    let err = run_sync_at(&req, now()).unwrap_err();
    assert!(matches!(err, SyncError::Empty { rows: 2 }));
    assert_eq!(fs::read_to_string(&req.output).unwrap(), "previous");
}

#[test]
fn missing_csv_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let req = SyncRequest {
        source: Some(RowSource::Csv(dir.path().join("nope.csv"))),
        output: dir.path().join("inventory.json"),
        dry_run: false,
    };
    assert!(matches!(run_sync_at(&req, now()), Err(SyncError::Io(_))));
}

#[test]
fn unreadable_csv_fails_and_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("latin1.csv");
    fs::write(&csv_path, b"id,name\nkar001,Bl\xe5 Katt\n").unwrap();
    let req = SyncRequest {
        source: Some(RowSource::Csv(csv_path)),
        output: dir.path().join("inventory.json"),
        dry_run: false,
    };
    fs::write(&req.output, "previous").unwrap();

    assert!(matches!(run_sync_at(&req, now()), Err(SyncError::Csv(_))));
    assert_eq!(fs::read_to_string(&req.output).unwrap(), "previous");
}
