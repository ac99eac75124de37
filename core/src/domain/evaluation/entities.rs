use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::reading::entities::RawValue;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Status {
    #[serde(rename = "低い")]
    Below,
    #[serde(rename = "基準値内")]
    Within,
    #[serde(rename = "高い")]
    Above,
}

/// A reading classified against its reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvaluatedReading {
    #[serde(rename = "項目")]
    pub item: String,
    #[serde(rename = "結果")]
    pub value: f64,
    #[serde(rename = "基準値")]
    pub reference_range: String,
    #[serde(rename = "評価")]
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    UnknownItem,
    NotNumeric(RawValue),
}

/// Per-reading result of range evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingOutcome {
    Evaluated(EvaluatedReading),
    Dropped { item: String, reason: DropReason },
}

impl ReadingOutcome {
    pub fn into_evaluated(self) -> Option<EvaluatedReading> {
        match self {
            ReadingOutcome::Evaluated(reading) => Some(reading),
            ReadingOutcome::Dropped { .. } => None,
        }
    }
}
