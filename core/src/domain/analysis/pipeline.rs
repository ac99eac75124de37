use tracing::info;

use crate::domain::{
    analysis::entities::AnalysisResult,
    catalog::entities::ReferenceCatalog,
    evaluation::{entities::ReadingOutcome, range_evaluator::evaluate_readings},
    reading::entities::Reading,
    recommendation::recommendation_engine::recommend,
};

/// Evaluate readings and derive recommendations. Holds no state between calls.
pub fn assemble(catalog: &ReferenceCatalog, readings: &[Reading]) -> AnalysisResult {
    let outcomes = evaluate_readings(catalog, readings);
    let analysis: Vec<_> = outcomes
        .into_iter()
        .filter_map(ReadingOutcome::into_evaluated)
        .collect();

    let recommendations = recommend(catalog, &analysis);

    info!(
        readings = readings.len(),
        evaluated = analysis.len(),
        dropped = readings.len() - analysis.len(),
        nutrients = recommendations.len(),
        "analysis assembled"
    );

    AnalysisResult {
        analysis,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::standard::{DIETARY_FIBER, HEMOGLOBIN, IRON, LDL_CHOLESTEROL, TRIGLYCERIDES},
        evaluation::entities::Status,
    };

    #[test]
    fn test_unknown_and_non_numeric_readings_never_reach_output() {
        let catalog = ReferenceCatalog::standard().unwrap();
        let result = assemble(
            &catalog,
            &[
                Reading::new("血糖値", 300.0),
                Reading::new(TRIGLYCERIDES, "未測定"),
                Reading::new(HEMOGLOBIN, 12.0),
            ],
        );

        assert_eq!(result.analysis.len(), 1);
        assert_eq!(result.analysis[0].item, HEMOGLOBIN);
        assert_eq!(result.analysis[0].status, Status::Below);
        assert!(result.recommendations.contains_key(IRON));
        assert!(!result.recommendations.contains_key(DIETARY_FIBER));
    }

    #[test]
    fn test_output_items_are_subset_of_catalog() {
        let catalog = ReferenceCatalog::standard().unwrap();
        let result = assemble(
            &catalog,
            &[
                Reading::new(LDL_CHOLESTEROL, 160.0),
                Reading::new("クレアチニン", 0.9),
            ],
        );

        assert!(result.analysis.iter().all(|r| catalog.range(&r.item).is_some()));
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let catalog = ReferenceCatalog::standard().unwrap();
        let readings = vec![
            Reading::new(HEMOGLOBIN, 12.0),
            Reading::new(LDL_CHOLESTEROL, 160.0),
            Reading::new(TRIGLYCERIDES, 200.0),
        ];

        let first = serde_json::to_string(&assemble(&catalog, &readings)).unwrap();
        let second = serde_json::to_string(&assemble(&catalog, &readings)).unwrap();
        assert_eq!(first, second);
    }
}
