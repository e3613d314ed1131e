use clap::Parser;
use listing_etl::utils::{logger, validation::Validate};
use listing_etl::{CliConfig, GoogleSheetsClient, RapidApiSource, SheetExporter, SyncPipeline};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting listing-etl");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // A broken credentials file only disables the spreadsheet stage; the
    // CSV export still runs.
    let exporter = match GoogleSheetsClient::from_service_account(Path::new(
        &config.credentials_file,
    ))
    .await
    {
        Ok(client) => Some(SheetExporter::new(client)),
        Err(e) => {
            tracing::error!("Failed to create sheets service: {}", e);
            None
        }
    };

    let source = RapidApiSource::new(
        config.api_endpoint.clone(),
        config.api_key.clone(),
        config.api_host.clone(),
    );
    let pipeline = SyncPipeline::new(source, config, exporter);

    match pipeline.run().await {
        Ok(summary) => {
            tracing::info!(
                "Run complete: fetched {}, exported {} rows, skipped {}",
                summary.fetched,
                summary.exported_rows,
                summary.skipped_rows
            );
            if let Some(path) = &summary.csv_path {
                println!("📁 CSV saved to: {}", path.display());
            }
            if summary.sheet_ok {
                println!("✅ Successfully exported to Google Sheets");
            } else if summary.exported_rows > 0 {
                println!("❌ Failed to export to Google Sheets");
            }
        }
        Err(e) => {
            tracing::error!("Run aborted: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
