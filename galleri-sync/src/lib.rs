//! Sync job: reads inventory rows from a spreadsheet and writes the
//! inventory JSON document the pages load.
//!
//! A run either replaces the whole document or leaves the previous one in
//! place. Missing credentials or an empty sheet skip the run without error.

pub mod config;
pub mod error;
pub mod rows;
pub mod source;
pub mod write;

use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use galleri_core::InventoryDocument;

pub use config::{Sourced, SyncConfig, ValueSource, mask_secret};
pub use error::SyncError;
pub use rows::{SheetRow, transform_rows};
pub use source::{RowSource, Rows};
pub use write::write_atomic;

/// One sync run.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// `None` when no CSV was given and the sheet credentials are incomplete.
    pub source: Option<RowSource>,
    pub output: PathBuf,
    pub dry_run: bool,
}

/// Why a run ended without touching the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoSource,
    NoRows,
}

/// Result of a run that did not fail.
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    Written {
        path: PathBuf,
        rows: usize,
        items: usize,
    },
    DryRun {
        rows: usize,
        document: InventoryDocument,
    },
    Skipped(SkipReason),
}

/// `lastUpdated` format: RFC 3339, UTC, millisecond precision.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Transform fetched rows into an inventory document stamped with `now`.
///
/// Fails with [`SyncError::Empty`] when rows were fetched but none of them
/// is a valid item.
pub fn build_document(rows: &Rows, now: DateTime<Utc>) -> Result<InventoryDocument, SyncError> {
    let items = transform_rows(rows, now.date_naive());
    let data_rows = rows
        .iter()
        .filter(|r| !SheetRow::from_cells(r).is_header())
        .count();
    if items.is_empty() && data_rows > 0 {
        return Err(SyncError::Empty { rows: data_rows });
    }
    Ok(InventoryDocument::new(timestamp(now), items))
}

/// Run a sync with the current time.
pub fn run_sync(request: &SyncRequest) -> Result<SyncOutcome, SyncError> {
    run_sync_at(request, Utc::now())
}

/// Run a sync as if it were `now`.
pub fn run_sync_at(request: &SyncRequest, now: DateTime<Utc>) -> Result<SyncOutcome, SyncError> {
    let Some(source) = &request.source else {
        log::warn!(
            "No spreadsheet configured; keeping existing {}",
            request.output.display()
        );
        return Ok(SyncOutcome::Skipped(SkipReason::NoSource));
    };

    log::debug!("Fetching rows from {source}");
    let rows = source.fetch()?;
    if rows.is_empty() {
        log::warn!("No rows found in {source}; keeping existing inventory");
        return Ok(SyncOutcome::Skipped(SkipReason::NoRows));
    }

    let document = build_document(&rows, now)?;
    if request.dry_run {
        return Ok(SyncOutcome::DryRun {
            rows: rows.len(),
            document,
        });
    }

    let json = document.to_json_pretty()?;
    write_atomic(&request.output, &json)?;
    Ok(SyncOutcome::Written {
        path: request.output.clone(),
        rows: rows.len(),
        items: document.items.len(),
    })
}
