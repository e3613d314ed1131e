use crate::core::sanitize::SHEETS_CELL_HARD_LIMIT;
use crate::domain::model::Table;
use crate::utils::error::{EtlError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use yup_oauth2::ServiceAccountAuthenticator;

const SHEETS_SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/spreadsheets"];
const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Thin wrapper around the Google Sheets v4 values endpoints. The
/// authorization happens once, in the constructor; everything downstream
/// receives this handle instead of building its own credentials.
pub struct GoogleSheetsClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    #[serde(default)]
    updated_cells: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsClient {
    /// Builds an authorized client from a local service-account key file.
    pub async fn from_service_account(key_path: &Path) -> Result<Self> {
        let sa_key = yup_oauth2::read_service_account_key(key_path).await?;
        let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;
        let token = auth.token(&SHEETS_SCOPES).await?;
        let token_str = token.token().ok_or_else(|| EtlError::SheetsError {
            message: "OAuth response contained no access token".to_string(),
        })?;

        let mut headers = HeaderMap::new();
        let auth_value =
            HeaderValue::from_str(&format!("Bearer {}", token_str)).map_err(|e| {
                EtlError::SheetsError {
                    message: format!("Failed to build Authorization header: {}", e),
                }
            })?;
        headers.insert(AUTHORIZATION, auth_value);

        let http = Client::builder().default_headers(headers).build()?;

        tracing::debug!("Successfully created sheets client");
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Unauthenticated client against an alternate endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Removes all values in the given range.
    pub async fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:clear",
            self.base_url, spreadsheet_id, range
        );
        let response = self.http.post(&url).json(&json!({})).send().await?;
        Self::check(response).await?;
        tracing::debug!("Cleared range {} in {}", range, spreadsheet_id);
        Ok(())
    }

    /// One bulk write of all rows. RAW input option: values land verbatim
    /// and are never evaluated as formulas.
    pub async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<String>],
    ) -> Result<u32> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?valueInputOption=RAW",
            self.base_url, spreadsheet_id, range
        );
        let body = json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": values,
        });

        let response = self.http.put(&url).json(&body).send().await?;
        let response = Self::check(response).await?;
        let update: UpdateValuesResponse = response.json().await?;
        Ok(update.updated_cells.unwrap_or(0))
    }

    /// Reads back the values in a range. Empty cells come back as an empty grid.
    pub async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, spreadsheet_id, range
        );
        let response = self.http.get(&url).send().await?;
        let response = Self::check(response).await?;
        let value_range: ValueRange = response.json().await?;
        Ok(value_range.values)
    }

    /// Cheap reachability check: read a single cell.
    pub async fn probe(&self, spreadsheet_id: &str) -> Result<()> {
        self.get_values(spreadsheet_id, "Sheet1!A1:A1").await?;
        Ok(())
    }

    // error_for_status would drop the response body, which is where the
    // Sheets API puts its diagnostics.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(EtlError::SheetsError {
            message: format!("{}: {}", status, body),
        })
    }
}

/// Writes a table into a spreadsheet range with clear-then-write semantics:
/// re-running with the same table always yields the same final sheet
/// contents, with no stale cells left over from a longer previous export.
pub struct SheetExporter {
    client: GoogleSheetsClient,
}

impl SheetExporter {
    pub fn new(client: GoogleSheetsClient) -> Self {
        Self { client }
    }

    /// Clears the range, then writes header and rows in a single bulk
    /// update. Returns the number of updated cells.
    ///
    /// Cells over the hard limit fail the whole export with an error naming
    /// row and column; by construction the pipeline's pre-filter keeps such
    /// cells out.
    pub async fn export(&self, table: &Table, spreadsheet_id: &str, range: &str) -> Result<u32> {
        verify_cell_limits(table)?;

        self.client.clear_values(spreadsheet_id, range).await?;

        let values = table.to_values();
        let updated = self
            .client
            .update_values(spreadsheet_id, range, &values)
            .await?;

        tracing::info!("Successfully updated {} cells", updated);
        Ok(updated)
    }
}

/// Rejects any cell over the Sheets hard limit, reporting its 1-based
/// row and column.
fn verify_cell_limits(table: &Table) -> Result<()> {
    let all_rows =
        std::iter::once(table.header()).chain(table.rows().iter().map(|row| row.as_slice()));

    for (row_idx, row) in all_rows.enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > SHEETS_CELL_HARD_LIMIT {
                return Err(EtlError::OversizedCellError {
                    row: row_idx + 1,
                    col: col_idx + 1,
                    len,
                    limit: SHEETS_CELL_HARD_LIMIT,
                });
            }
        }
    }
    Ok(())
}
