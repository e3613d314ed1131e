use crate::core::csv_export::export_csv;
use crate::core::fetch::load_snapshot;
use crate::core::sanitize::ColumnLimits;
use crate::core::sheets::SheetExporter;
use crate::core::table::{build_export_table, TableBuild};
use crate::domain::model::{Listing, RunSummary, SearchFilters};
use crate::domain::ports::{ConfigProvider, ListingSource};
use crate::utils::error::Result;
use std::path::Path;

/// Orchestrates one run: fetch listings (snapshot first, then the live
/// API), write them to CSV, build the filtered export table, and push it
/// to the spreadsheet.
///
/// Only a complete fetch failure aborts the run. CSV and sheet failures
/// are logged, recorded in the summary, and never panic.
pub struct SyncPipeline<S: ListingSource, C: ConfigProvider> {
    source: S,
    config: C,
    exporter: Option<SheetExporter>,
    limits: ColumnLimits,
}

impl<S: ListingSource, C: ConfigProvider> SyncPipeline<S, C> {
    pub fn new(source: S, config: C, exporter: Option<SheetExporter>) -> Self {
        Self {
            source,
            config,
            exporter,
            limits: ColumnLimits::default(),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let listings = match self.acquire_listings(&mut summary).await {
            Ok(listings) => listings,
            Err(e) => {
                tracing::error!("Fetch failed, aborting run: {}", e);
                return Err(e);
            }
        };

        if listings.is_empty() {
            tracing::info!("No listings found");
            return Ok(summary);
        }
        summary.fetched = listings.len();

        match export_csv(&listings, Path::new(self.config.output_path()), None) {
            Ok(path) => summary.csv_path = Some(path),
            Err(e) => tracing::error!("Failed to export to CSV: {}", e),
        }

        tracing::info!("Processing {} listings for Google Sheets...", listings.len());
        let TableBuild { table, skipped } = build_export_table(&listings, &self.limits);
        summary.skipped_rows = skipped;
        tracing::info!(
            "Prepared {} valid rows for export (skipped {} rows with oversized cells)",
            table.row_count(),
            skipped
        );

        if table.is_empty() {
            tracing::info!("No valid data to export after filtering");
            return Ok(summary);
        }
        summary.exported_rows = table.row_count();

        match &self.exporter {
            Some(exporter) => {
                tracing::info!("Exporting to Google Sheets...");
                match exporter
                    .export(&table, self.config.spreadsheet_id(), self.config.range())
                    .await
                {
                    Ok(cells) => {
                        summary.sheet_ok = true;
                        summary.sheet_updated_cells = Some(cells);
                    }
                    Err(e) => tracing::error!("Failed to export to Google Sheets: {}", e),
                }
            }
            None => {
                tracing::warn!("No authorized sheets client, skipping spreadsheet export");
            }
        }

        Ok(summary)
    }

    /// Snapshot first; a missing snapshot file means fetch fresh data.
    async fn acquire_listings(&self, summary: &mut RunSummary) -> Result<Vec<Listing>> {
        let snapshot_path = Path::new(self.config.snapshot_file());
        if let Some(listings) = load_snapshot(snapshot_path)? {
            tracing::info!(
                "Found {} listings in snapshot {}",
                listings.len(),
                snapshot_path.display()
            );
            summary.used_snapshot = true;
            return Ok(listings);
        }

        tracing::info!("No existing snapshot found, fetching new data...");
        let filters = SearchFilters {
            query: self.config.query().to_string(),
            gl: self.config.site().to_string(),
            ..SearchFilters::default()
        };
        self.source.fetch(&filters).await
    }
}
