pub mod recommendation_engine;

use std::collections::BTreeMap;

/// Nutrient name to its recommended foods, only for nutrients triggered by the current request.
pub type NutrientRecommendations = BTreeMap<String, Vec<String>>;
