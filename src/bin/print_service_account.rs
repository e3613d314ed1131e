use anyhow::Context;
use clap::Parser;
use listing_etl::config::credentials::ServiceAccountInfo;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "print_service_account")]
#[command(about = "Prints the service-account email from a credentials file")]
struct Args {
    #[arg(long, default_value = "credentials.json")]
    credentials_file: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let info = ServiceAccountInfo::from_file(Path::new(&args.credentials_file))
        .with_context(|| format!("Failed to read {}", args.credentials_file))?;

    println!("Service Account Email: {}", info.client_email);
    Ok(())
}
