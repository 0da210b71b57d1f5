//! CSV export parsing

use super::types::Row;
use crate::utils::error::Result;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Decode the raw export body
///
/// Invalid UTF-8 is replaced rather than rejected, and a leading byte order
/// mark is dropped so it does not end up in the first header.
pub fn decode_export(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string()
}

/// Parse CSV text with a header row into rows
///
/// Short records leave their trailing columns absent and cells beyond the
/// header are ignored.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row: Row = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "Parsed sheet export");
    Ok(rows)
}
