use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError, ingestion::entities::Table,
    reading::entities::Reading,
};

pub const ITEM_COLUMN: &str = "項目";
pub const RESULT_COLUMN: &str = "結果";

pub const INVALID_DATA_MESSAGE: &str = "データの形式が正しくありません。「項目」と「結果」が必要です。";
pub const INVALID_FILE_MESSAGE: &str =
    "ファイルの形式が正しくありません。「項目」と「結果」列が必要です。";

/// Readings from a direct item → value map, in the order given.
pub fn ingest_entries(entries: Vec<Reading>) -> Result<Vec<Reading>, CoreError> {
    if entries.is_empty() {
        return Err(CoreError::Validation(INVALID_DATA_MESSAGE.to_string()));
    }

    Ok(entries)
}

/// Readings from the item and result columns of a table, in row order.
///
/// Blank item cells are skipped and the first row wins when an item repeats.
pub fn ingest_table(table: &Table) -> Result<Vec<Reading>, CoreError> {
    let (Some(item_column), Some(result_column)) =
        (table.column(ITEM_COLUMN), table.column(RESULT_COLUMN))
    else {
        return Err(CoreError::Validation(INVALID_FILE_MESSAGE.to_string()));
    };

    let mut seen = HashSet::new();
    let mut readings = Vec::with_capacity(table.rows.len());

    for (row_index, row) in table.rows.iter().enumerate() {
        let item = row.get(item_column).map(|cell| cell.trim()).unwrap_or("");
        if item.is_empty() {
            continue;
        }

        if !seen.insert(item.to_string()) {
            debug!(item, row_index, "ignoring repeated item row");
            continue;
        }

        let value = row.get(result_column).cloned().unwrap_or_default();
        readings.push(Reading::new(item, value));
    }

    Ok(readings)
}
