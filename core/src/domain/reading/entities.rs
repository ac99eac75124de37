use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reading value as it arrived, before numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Finite number, or text that parses as one after trimming.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) => value.is_finite().then_some(*value),
            RawValue::Text(text) => parse_decimal(text),
        }
    }
}

/// Trimmed decimal token. Full-width digits, point and signs (`１２．５`) are folded to ASCII first.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let ascii: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '．' => '.',
            '－' => '-',
            '＋' => '+',
            other => other,
        })
        .collect();

    ascii.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => match number.as_f64() {
                Some(value) => RawValue::Number(value),
                None => RawValue::Text(number.to_string()),
            },
            serde_json::Value::String(text) => RawValue::Text(text),
            other => RawValue::Text(other.to_string()),
        }
    }
}

/// One (item, value) pair before evaluation. The item may be unknown to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Reading {
    pub item: String,
    pub value: RawValue,
}

impl Reading {
    pub fn new(item: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            item: item.into(),
            value: value.into(),
        }
    }
}
