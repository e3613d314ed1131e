use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single classified-ad record as returned by the source API.
/// Immutable once received; listings have no identity beyond their url.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// JSON request body of the source API's search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub gl: String,
    pub hl: String,
    pub has_pic: bool,
    pub posted_today: bool,
    pub show_duplicates: bool,
    pub search_title_only: bool,
    pub search_distance: u32,
    pub page: u32,
    pub purveyor: String,
    pub min_price: u32,
    pub max_price: u32,
    pub auto_make_model: String,
    pub crypto_currency_ok: bool,
    pub delivery_available: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: "cars".to_string(),
            gl: "newyork".to_string(),
            hl: "en".to_string(),
            has_pic: false,
            posted_today: false,
            show_duplicates: false,
            search_title_only: false,
            search_distance: 0,
            page: 0,
            purveyor: String::new(),
            min_price: 0,
            max_price: 0,
            auto_make_model: String::new(),
            crypto_currency_ok: false,
            delivery_available: false,
        }
    }
}

/// A header row plus aligned data rows, the common export shape for the
/// spreadsheet sink. Invariant: every row has exactly `header.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Appends a row, padding or cutting it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.width(), String::new());
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table carries no data rows (the header does not count).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by data rows, the layout the bulk update call expects.
    pub fn to_values(&self) -> Vec<Vec<String>> {
        let mut values = Vec::with_capacity(self.rows.len() + 1);
        values.push(self.header.clone());
        values.extend(self.rows.iter().cloned());
        values
    }
}

/// What a single pipeline run did, stage by stage.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub used_snapshot: bool,
    pub csv_path: Option<PathBuf>,
    pub exported_rows: usize,
    pub skipped_rows: usize,
    pub sheet_ok: bool,
    pub sheet_updated_cells: Option<u32>,
}
