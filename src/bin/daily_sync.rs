use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;
use listing_etl::utils::{logger, validation::Validate};
use listing_etl::{CliConfig, GoogleSheetsClient, RapidApiSource, SheetExporter, SyncPipeline};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "daily_sync")]
#[command(about = "Re-runs the fetch/export pipeline once a day at a fixed local time")]
struct SchedulerConfig {
    #[arg(long, default_value = "09:00", help = "Local trigger time, HH:MM")]
    at: String,

    #[command(flatten)]
    etl: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SchedulerConfig::parse();

    logger::init_cli_logger(config.etl.verbose);
    config.etl.validate()?;

    let trigger = NaiveTime::parse_from_str(&config.at, "%H:%M")
        .with_context(|| format!("Invalid trigger time '{}', expected HH:MM", config.at))?;

    tracing::info!("Scheduler armed for {} local time", config.at);

    // Starting after today's trigger must not fire a catch-up run.
    let mut last_run: Option<NaiveDate> = if Local::now().time() >= trigger {
        Some(Local::now().date_naive())
    } else {
        None
    };

    loop {
        let now = Local::now();
        if now.time() >= trigger && last_run != Some(now.date_naive()) {
            last_run = Some(now.date_naive());
            tracing::info!("Trigger time reached, starting run");
            run_once(&config.etl).await;
        }
        tokio::time::sleep(Duration::from_secs(60)).await;
    }
}

// Runs never overlap: the loop awaits each run to completion before it
// sleeps again. There is no supervision if a run hangs.
async fn run_once(config: &CliConfig) {
    // Rebuilt each run; the service-account token does not outlive a day.
    let exporter =
        match GoogleSheetsClient::from_service_account(Path::new(&config.credentials_file)).await {
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
    let pipeline = SyncPipeline::new(source, config.clone(), exporter);

    match pipeline.run().await {
        Ok(summary) => tracing::info!(
            "Scheduled run complete: fetched {}, exported {} rows, skipped {}",
            summary.fetched,
            summary.exported_rows,
            summary.skipped_rows
        ),
        Err(e) => tracing::error!("Scheduled run aborted: {}", e),
    }
}
