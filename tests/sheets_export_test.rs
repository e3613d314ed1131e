use httpmock::prelude::*;
use listing_etl::core::sanitize::SHEETS_CELL_HARD_LIMIT;
use listing_etl::core::Table;
use listing_etl::{EtlError, GoogleSheetsClient, SheetExporter};

fn sample_table() -> Table {
    let mut table = Table::new(vec![
        "Title".to_string(),
        "Price".to_string(),
        "Location".to_string(),
        "URL".to_string(),
    ]);
    table.push_row(vec![
        "Car A".to_string(),
        "$5000".to_string(),
        "NYC".to_string(),
        "http://x/1".to_string(),
    ]);
    table
}

#[tokio::test]
async fn test_export_clears_then_updates_raw() {
    let server = MockServer::start();
    let clear_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A1:clear");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"clearedRange": "Sheet1!A1:D2"}));
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A1")
            .query_param("valueInputOption", "RAW")
            .json_body(serde_json::json!({
                "range": "Sheet1!A1",
                "majorDimension": "ROWS",
                "values": [
                    ["Title", "Price", "Location", "URL"],
                    ["Car A", "$5000", "NYC", "http://x/1"]
                ]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"updatedCells": 8}));
    });

    let exporter = SheetExporter::new(GoogleSheetsClient::with_base_url(server.base_url()));
    let updated = exporter
        .export(&sample_table(), "sheet-1", "Sheet1!A1")
        .await
        .unwrap();

    clear_mock.assert();
    update_mock.assert();
    assert_eq!(updated, 8);
}

#[tokio::test]
async fn test_export_is_idempotent_per_clear_then_write() {
    let server = MockServer::start();
    let clear_mock = server.mock(|when, then| {
        when.method(POST).path_contains(":clear");
        then.status(200).json_body(serde_json::json!({}));
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A1")
            .json_body(serde_json::json!({
                "range": "Sheet1!A1",
                "majorDimension": "ROWS",
                "values": [
                    ["Title", "Price", "Location", "URL"],
                    ["Car A", "$5000", "NYC", "http://x/1"]
                ]
            }));
        then.status(200)
            .json_body(serde_json::json!({"updatedCells": 8}));
    });

    let exporter = SheetExporter::new(GoogleSheetsClient::with_base_url(server.base_url()));
    let table = sample_table();

    let first = exporter.export(&table, "sheet-1", "Sheet1!A1").await.unwrap();
    let second = exporter.export(&table, "sheet-1", "Sheet1!A1").await.unwrap();

    // Same table, same payload, twice; the range is wiped before each write.
    clear_mock.assert_hits(2);
    update_mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_clear_failure_stops_before_update() {
    let server = MockServer::start();
    let clear_mock = server.mock(|when, then| {
        when.method(POST).path_contains(":clear");
        then.status(403).json_body(
            serde_json::json!({"error": {"message": "The caller does not have permission"}}),
        );
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT).path_contains("/values/");
        then.status(200);
    });

    let exporter = SheetExporter::new(GoogleSheetsClient::with_base_url(server.base_url()));
    let result = exporter.export(&sample_table(), "sheet-1", "Sheet1!A1").await;

    clear_mock.assert();
    update_mock.assert_hits(0);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("does not have permission"));
}

#[tokio::test]
async fn test_oversized_cell_fails_without_any_http_call() {
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.path_contains("/v4/spreadsheets");
        then.status(200);
    });

    let mut table = sample_table();
    table.push_row(vec![
        "Car B".to_string(),
        "$1".to_string(),
        "LA".to_string(),
        "u".repeat(SHEETS_CELL_HARD_LIMIT + 1),
    ]);

    let exporter = SheetExporter::new(GoogleSheetsClient::with_base_url(server.base_url()));
    let err = exporter
        .export(&table, "sheet-1", "Sheet1!A1")
        .await
        .unwrap_err();

    any_mock.assert_hits(0);
    match err {
        EtlError::OversizedCellError { row, col, .. } => {
            // Header is row 1; the bad row is the third overall, column 4.
            assert_eq!(row, 3);
            assert_eq!(col, 4);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_values_and_probe() {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v4/spreadsheets/sheet-1/values/Sheet1!A1:A1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "range": "Sheet1!A1:A1",
                "majorDimension": "ROWS",
                "values": [["Title"]]
            }));
    });

    let client = GoogleSheetsClient::with_base_url(server.base_url());

    let values = client.get_values("sheet-1", "Sheet1!A1:A1").await.unwrap();
    assert_eq!(values, vec![vec!["Title".to_string()]]);

    client.probe("sheet-1").await.unwrap();
    get_mock.assert_hits(2);
}

#[tokio::test]
async fn test_get_values_on_empty_range_returns_empty_grid() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/values/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"range": "Sheet1!A1:A1", "majorDimension": "ROWS"}));
    });

    let client = GoogleSheetsClient::with_base_url(server.base_url());
    let values = client.get_values("sheet-1", "Sheet1!A1:A1").await.unwrap();
    assert!(values.is_empty());
}
