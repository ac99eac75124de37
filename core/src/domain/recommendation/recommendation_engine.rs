use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::{
    catalog::entities::ReferenceCatalog, evaluation::entities::EvaluatedReading,
    recommendation::NutrientRecommendations,
};

/// Nutrients whose trigger rule fired on at least one reading.
pub fn triggered_nutrients<'a>(
    catalog: &'a ReferenceCatalog,
    readings: &[EvaluatedReading],
) -> BTreeSet<&'a str> {
    catalog
        .rules()
        .iter()
        .filter(|rule| readings.iter().any(|reading| rule.fires_on(reading)))
        .map(|rule| rule.nutrient.as_str())
        .collect()
}

/// Map each triggered nutrient to its food list, copied from the catalog.
pub fn recommend(
    catalog: &ReferenceCatalog,
    readings: &[EvaluatedReading],
) -> NutrientRecommendations {
    triggered_nutrients(catalog, readings)
        .into_iter()
        .filter_map(|nutrient| match catalog.foods(nutrient) {
            Some(foods) => Some((nutrient.to_string(), foods.to_vec())),
            None => {
                warn!(nutrient, "triggered nutrient has no food list");
                None
            }
        })
        .collect()
}
