use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    evaluation::entities::{EvaluatedReading, Status},
};

/// Accepted `[min, max]` interval and unit for one lab item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceRange {
    pub item: String,
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl ReferenceRange {
    pub fn new(item: impl Into<String>, min: f64, max: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            min,
            max,
            unit: unit.into(),
        }
    }

    /// Exact `min` and `max` count as within range.
    pub fn classify(&self, value: f64) -> Status {
        if value < self.min {
            Status::Below
        } else if value > self.max {
            Status::Above
        } else {
            Status::Within
        }
    }

    /// Renders as `"13.1 - 16.3 g/dL"`.
    pub fn display(&self) -> String {
        format!("{} - {} {}", self.min, self.max, self.unit)
    }
}

/// An abnormal classification on `item` that triggers a `nutrient` recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TriggerRule {
    pub item: String,
    pub status: Status,
    pub nutrient: String,
}

impl TriggerRule {
    pub fn new(item: impl Into<String>, status: Status, nutrient: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            status,
            nutrient: nutrient.into(),
        }
    }

    pub fn fires_on(&self, reading: &EvaluatedReading) -> bool {
        reading.item == self.item && reading.status == self.status
    }
}

/// Immutable lookup tables for lab items, nutrient foods and trigger rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCatalog {
    ranges: Vec<ReferenceRange>,
    index: HashMap<String, usize>,
    foods: BTreeMap<String, Vec<String>>,
    rules: Vec<TriggerRule>,
}

impl ReferenceCatalog {
    pub fn new(
        ranges: Vec<ReferenceRange>,
        foods: BTreeMap<String, Vec<String>>,
        rules: Vec<TriggerRule>,
    ) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(ranges.len());

        for (position, range) in ranges.iter().enumerate() {
            if range.item.trim().is_empty() {
                return Err(CoreError::Validation(
                    "reference range item name cannot be empty".to_string(),
                ));
            }

            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(CoreError::Validation(format!(
                    "invalid reference range for {}: {} - {}",
                    range.item, range.min, range.max
                )));
            }

            if index.insert(range.item.clone(), position).is_some() {
                return Err(CoreError::Validation(format!(
                    "duplicate reference range for {}",
                    range.item
                )));
            }
        }

        let mut seen_rules = HashSet::new();
        for rule in &rules {
            if !index.contains_key(&rule.item) {
                return Err(CoreError::Validation(format!(
                    "trigger rule names unknown item {}",
                    rule.item
                )));
            }

            if !foods.contains_key(&rule.nutrient) {
                return Err(CoreError::Validation(format!(
                    "trigger rule names unknown nutrient {}",
                    rule.nutrient
                )));
            }

            if rule.status == Status::Within {
                return Err(CoreError::Validation(format!(
                    "trigger rule for {} must fire on an abnormal status",
                    rule.item
                )));
            }

            if !seen_rules.insert((rule.item.as_str(), rule.status, rule.nutrient.as_str())) {
                return Err(CoreError::Validation(format!(
                    "duplicate trigger rule for {}",
                    rule.item
                )));
            }
        }

        Ok(Self {
            ranges,
            index,
            foods,
            rules,
        })
    }

    /// Ranges in declaration order.
    pub fn ranges(&self) -> &[ReferenceRange] {
        &self.ranges
    }

    pub fn range(&self, item: &str) -> Option<&ReferenceRange> {
        self.index.get(item).map(|&position| &self.ranges[position])
    }

    pub fn foods(&self, nutrient: &str) -> Option<&[String]> {
        self.foods.get(nutrient).map(Vec::as_slice)
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }
}
