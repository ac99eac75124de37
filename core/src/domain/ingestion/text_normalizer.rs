use regex::Regex;
use tracing::{debug, error};

use crate::domain::{
    catalog::entities::ReferenceCatalog, common::entities::app_errors::CoreError,
    reading::entities::{Reading, parse_decimal},
};

pub const NO_DATA_MESSAGE: &str = "ファイルからデータを抽出できませんでした。";

/// Value pattern following an item name: optional colon, then an integer or decimal
/// in ASCII or full-width digits.
const VALUE_PATTERN: &str = r"\s*[:：]?\s*([0-9０-９]+(?:[.．][0-9０-９]+)?)";

#[derive(Debug, Clone)]
struct ItemMatcher {
    item: String,
    pattern: Regex,
}

impl ItemMatcher {
    fn new(item: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("{}{}", regex::escape(item), VALUE_PATTERN))?;
        Ok(Self {
            item: item.to_string(),
            pattern,
        })
    }

    /// First occurrence only; later mentions of the item are ignored.
    fn first_value(&self, text: &str) -> Option<f64> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .and_then(|value| parse_decimal(value.as_str()))
    }
}

/// Recovers readings from free text produced by OCR or PDF extraction.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    matchers: Vec<ItemMatcher>,
}

impl TextNormalizer {
    /// One matcher per catalog item, in catalog order.
    pub fn new(catalog: &ReferenceCatalog) -> Result<Self, CoreError> {
        let matchers = catalog
            .ranges()
            .iter()
            .map(|range| ItemMatcher::new(&range.item))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to compile item matcher: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { matchers })
    }

    /// Each item is searched independently; items without a match are omitted.
    /// Fails when no item matched at all.
    pub fn normalize(&self, text: &str) -> Result<Vec<Reading>, CoreError> {
        let readings: Vec<Reading> = self
            .matchers
            .iter()
            .filter_map(|matcher| {
                matcher
                    .first_value(text)
                    .map(|value| Reading::new(matcher.item.clone(), value))
            })
            .collect();

        debug!(
            matched = readings.len(),
            searched = self.matchers.len(),
            "normalized extracted text"
        );

        if readings.is_empty() {
            return Err(CoreError::Extraction(NO_DATA_MESSAGE.to_string()));
        }

        Ok(readings)
    }
}
