use crate::domain::model::Listing;
use crate::utils::error::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Column order of the CSV file. Lowercase, unlike the spreadsheet header.
pub const CSV_HEADER: [&str; 4] = ["title", "price", "location", "url"];

/// Timestamped to the second, so repeated runs never collide on a name.
pub fn default_csv_filename() -> String {
    format!(
        "craigslist_listings_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Writes one row per listing using only the four known fields; missing
/// fields become empty strings. No length cap applies here, the CSV keeps
/// content the spreadsheet export would drop.
pub fn export_csv(listings: &[Listing], dir: &Path, filename: Option<&str>) -> Result<PathBuf> {
    let name = filename
        .map(str::to_string)
        .unwrap_or_else(default_csv_filename);

    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(CSV_HEADER)?;
    for listing in listings {
        writer.write_record([
            listing.title.as_deref().unwrap_or(""),
            listing.price.as_deref().unwrap_or(""),
            listing.location.as_deref().unwrap_or(""),
            listing.url.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;

    tracing::info!(
        "Successfully exported {} listings to {}",
        listings.len(),
        path.display()
    );
    Ok(path)
}
