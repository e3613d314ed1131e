use crate::core::sanitize::{clean_cell, ColumnLimits};
use crate::domain::model::{Listing, Table};

/// Column names of the spreadsheet export.
pub const EXPORT_HEADER: [&str; 4] = ["Title", "Price", "Location", "URL"];

#[derive(Debug)]
pub struct TableBuild {
    pub table: Table,
    pub skipped: usize,
}

/// Builds the export table from raw listings. A row containing any cell
/// over its column budget is excluded entirely and counted, never truncated.
pub fn build_export_table(listings: &[Listing], limits: &ColumnLimits) -> TableBuild {
    let mut table = Table::new(EXPORT_HEADER.iter().map(|s| s.to_string()).collect());
    let mut skipped = 0;

    for listing in listings {
        let cells = [
            clean_cell(listing.title.as_deref(), limits.title),
            clean_cell(listing.price.as_deref(), limits.price),
            clean_cell(listing.location.as_deref(), limits.location),
            clean_cell(listing.url.as_deref(), limits.url),
        ];

        match cells.into_iter().collect::<Option<Vec<String>>>() {
            Some(row) => table.push_row(row),
            None => skipped += 1,
        }
    }

    TableBuild { table, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: &str, location: &str, url: &str) -> Listing {
        Listing {
            title: Some(title.to_string()),
            price: Some(price.to_string()),
            location: Some(location.to_string()),
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn test_builds_header_plus_one_row_per_listing() {
        let listings = vec![
            listing("Car A", "$5000", "NYC", "http://x/1"),
            listing("Car B", "$7000", "LA", "http://x/2"),
        ];

        let build = build_export_table(&listings, &ColumnLimits::default());

        assert_eq!(build.skipped, 0);
        assert_eq!(build.table.row_count(), 2);
        assert_eq!(build.table.header(), ["Title", "Price", "Location", "URL"]);
        assert_eq!(build.table.rows()[0], ["Car A", "$5000", "NYC", "http://x/1"]);
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let listings = vec![Listing {
            title: Some("Car A".to_string()),
            price: None,
            location: None,
            url: None,
        }];

        let build = build_export_table(&listings, &ColumnLimits::default());

        assert_eq!(build.table.rows()[0].len(), build.table.width());
        assert_eq!(build.table.rows()[0], ["Car A", "", "", ""]);
    }

    #[test]
    fn test_oversized_title_drops_row_and_counts_it() {
        let listings = vec![
            listing(&"x".repeat(60_000), "$1", "NYC", "http://x/1"),
            listing("Car B", "$2", "LA", "http://x/2"),
        ];

        let build = build_export_table(&listings, &ColumnLimits::default());

        assert_eq!(build.skipped, 1);
        assert_eq!(build.table.row_count(), 1);
        assert_eq!(build.table.rows()[0][0], "Car B");
    }

    #[test]
    fn test_oversized_url_drops_row() {
        let listings = vec![listing("Car A", "$1", "NYC", &"u".repeat(1_001))];

        let build = build_export_table(&listings, &ColumnLimits::default());

        assert_eq!(build.skipped, 1);
        assert!(build.table.is_empty());
    }
}
