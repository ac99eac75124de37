use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    evaluation::entities::EvaluatedReading, recommendation::NutrientRecommendations,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub analysis: Vec<EvaluatedReading>,
    pub recommendations: NutrientRecommendations,
}
