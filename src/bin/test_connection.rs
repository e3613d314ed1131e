use clap::Parser;
use listing_etl::utils::logger;
use listing_etl::GoogleSheetsClient;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "test_connection")]
#[command(about = "Verifies the service-account credentials can read the target spreadsheet")]
struct Args {
    #[arg(long, default_value = "credentials.json")]
    credentials_file: String,

    #[arg(long)]
    spreadsheet_id: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::debug!("Loading credentials from {}", args.credentials_file);

    let result = async {
        let client =
            GoogleSheetsClient::from_service_account(Path::new(&args.credentials_file)).await?;
        tracing::debug!("Testing API call...");
        client.probe(&args.spreadsheet_id).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Successfully connected to Google Sheets API");
            println!("Connection test passed!");
        }
        Err(e) => {
            tracing::error!("Connection test failed: {}", e);
            println!("Connection test failed: {}", e);
            std::process::exit(1);
        }
    }
}
