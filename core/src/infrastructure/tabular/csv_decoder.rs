use csv::{ReaderBuilder, Trim};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingestion::{entities::Table, ports::TableDecoder},
};

#[derive(Debug, Clone, Default)]
pub struct CsvTableDecoder;

impl CsvTableDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TableDecoder for CsvTableDecoder {
    fn decode(&self, data: &[u8]) -> Result<Table, CoreError> {
        let text = std::str::from_utf8(data).map_err(|e| {
            tracing::warn!("CSV upload is not valid UTF-8: {}", e);
            CoreError::Validation("CSVファイルはUTF-8でエンコードしてください。".to_string())
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| {
                tracing::warn!("Failed to read CSV header: {}", e);
                CoreError::Validation(format!("CSVのヘッダーを読み取れませんでした: {}", e))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| record.map(|record| record.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()
            .map_err(|e| {
                tracing::warn!("Failed to read CSV record: {}", e);
                CoreError::Validation(format!("CSVの行を読み取れませんでした: {}", e))
            })?;

        Ok(Table::new(headers, rows))
    }
}
