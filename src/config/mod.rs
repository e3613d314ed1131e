pub mod credentials;

use crate::core::ConfigProvider;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listing-etl")]
#[command(about = "Fetches classified-ad listings, exports them to CSV and Google Sheets")]
pub struct CliConfig {
    #[arg(long, default_value = "https://craigslist-data.p.rapidapi.com/for-sale")]
    pub api_endpoint: String,

    #[arg(long, help = "RapidAPI key for the listings endpoint")]
    pub api_key: String,

    #[arg(long, default_value = "craigslist-data.p.rapidapi.com")]
    pub api_host: String,

    #[arg(long, default_value = "cars")]
    pub query: String,

    #[arg(long, default_value = "newyork", help = "Craigslist site code")]
    pub site: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(
        long,
        default_value = "craigslist_data.json",
        help = "Local API snapshot; when present, no live fetch happens"
    )]
    pub snapshot_file: String,

    #[arg(long, help = "Target Google Sheets document ID")]
    pub spreadsheet_id: String,

    #[arg(long, default_value = "Sheet1!A1", help = "A1-style range to overwrite")]
    pub range: String,

    #[arg(long, default_value = "credentials.json")]
    pub credentials_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn query(&self) -> &str {
        &self.query
    }

    fn site(&self) -> &str {
        &self.site
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn snapshot_file(&self) -> &str {
        &self.snapshot_file
    }

    fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    fn range(&self) -> &str {
        &self.range
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        validate_range("range", &self.range)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("credentials_file", &self.credentials_file)?;
        Ok(())
    }
}
