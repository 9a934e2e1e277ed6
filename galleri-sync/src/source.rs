//! Where spreadsheet rows come from: a CSV export on disk or the Google
//! Sheets values API.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SyncError;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// Raw rows, one `Vec` of cells per spreadsheet row.
pub type Rows = Vec<Vec<String>>;

/// A place to read inventory rows from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSource {
    /// A CSV export of the inventory tab.
    Csv(PathBuf),
    /// A live sheet, read with an API key.
    Sheets {
        sheet_id: String,
        api_key: String,
        range: String,
    },
}

impl fmt::Display for RowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(path) => write!(f, "{}", path.display()),
            Self::Sheets {
                sheet_id, range, ..
            } => write!(f, "sheet {sheet_id} ({range})"),
        }
    }
}

impl RowSource {
    /// Fetch every row from the source.
    pub fn fetch(&self) -> Result<Rows, SyncError> {
        match self {
            Self::Csv(path) => read_csv_file(path),
            Self::Sheets {
                sheet_id,
                api_key,
                range,
            } => fetch_sheet(sheet_id, api_key, range),
        }
    }
}

// ── CSV ─────────────────────────────────────────────────────────────────────

/// Read a CSV export from disk.
pub fn read_csv_file(path: &Path) -> Result<Rows, SyncError> {
    let contents = std::fs::read(path)?;
    parse_csv_bytes(&contents)
}

/// Parse CSV text into rows.
pub fn parse_csv_rows(content: &str) -> Result<Rows, SyncError> {
    parse_csv_bytes(content.as_bytes())
}

/// Parse raw CSV bytes into rows.
///
/// The header row, if present, is kept; the transform recognises and skips
/// it. Rows may have any number of cells. A record that cannot be read
/// (invalid UTF-8, for one) aborts the run.
pub fn parse_csv_bytes(content: &[u8]) -> Result<Rows, SyncError> {
    let content = content.strip_prefix(b"\xef\xbb\xbf").unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

// ── Google Sheets ───────────────────────────────────────────────────────────

/// Body of a `spreadsheets.values.get` response.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Error body returned by the Sheets API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// URL for reading `range` of `sheet_id`.
pub fn values_url(sheet_id: &str, range: &str, api_key: &str) -> Result<reqwest::Url, SyncError> {
    let mut url = reqwest::Url::parse(SHEETS_API_BASE)
        .map_err(|e| SyncError::config(format!("Invalid API base URL: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| SyncError::config("API base URL cannot take a path"))?
        .pop_if_empty()
        .extend([sheet_id, "values", range]);
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url)
}

fn fetch_sheet(sheet_id: &str, api_key: &str, range: &str) -> Result<Rows, SyncError> {
    let url = values_url(sheet_id, range, api_key)?;

    let response = reqwest::blocking::get(url)
        .map_err(|e| SyncError::http(format!("Failed to fetch sheet '{sheet_id}': {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| SyncError::http(format!("Failed to read sheet response: {e}")))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
        return Err(SyncError::Status {
            status: status.as_u16(),
            message,
        });
    }

    parse_values_response(&body)
}

/// Parse a values response into rows. Non-string cells are rendered as text.
pub fn parse_values_response(body: &str) -> Result<Rows, SyncError> {
    let range: ValueRange = serde_json::from_str(body)?;
    Ok(range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
