/// Hard limit Google Sheets places on a single cell.
pub const SHEETS_CELL_HARD_LIMIT: usize = 50_000;

/// Default per-cell budget for exported content, kept below the hard
/// limit for safety.
pub const DEFAULT_MAX_CELL_LEN: usize = 40_000;

/// Per-column length budgets for the export table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLimits {
    pub title: usize,
    pub price: usize,
    pub location: usize,
    pub url: usize,
}

impl Default for ColumnLimits {
    fn default() -> Self {
        Self {
            title: DEFAULT_MAX_CELL_LEN,
            price: 100,
            location: 200,
            url: 1_000,
        }
    }
}

/// Trims raw cell content and checks it against `max_len`.
///
/// Returns `None` when the trimmed content is still over the limit; the
/// caller is expected to drop the whole row. Oversized content is never
/// truncated here. Empty or absent input yields an empty string, never a
/// rejection.
pub fn clean_cell(raw: Option<&str>, max_len: usize) -> Option<String> {
    let cleaned = raw.unwrap_or_default().trim();
    let len = cleaned.chars().count();
    if len > max_len {
        tracing::warn!(
            "Content length {} exceeds limit of {} characters, row will be skipped",
            len,
            max_len
        );
        return None;
    }
    Some(cleaned.to_string())
}
