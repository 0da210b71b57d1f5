//! Spreadsheet rows
//!
//! This module fetches the sheet's CSV export and turns it into [`Row`]s.

mod parse;
mod sheet;
mod types;

// Re-export public types
pub use parse::{decode_export, parse_rows};
pub use sheet::{RowSource, SheetSource};
#[cfg(test)]
pub use sheet::MockRowSource;
pub use types::{ROW_ID_FIELD, Row};
