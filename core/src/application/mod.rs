use std::sync::Arc;

use crate::{
    domain::{
        catalog::entities::ReferenceCatalog,
        common::{BloodlensConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{extraction::HttpTextExtractionClient, tabular::CsvTableDecoder},
};

pub type BloodlensService = Service<HttpTextExtractionClient, CsvTableDecoder>;

/// Build the process-wide service. The reference catalog is constructed once here.
pub fn create_service(config: BloodlensConfig) -> Result<BloodlensService, CoreError> {
    let catalog = Arc::new(ReferenceCatalog::standard()?);
    let extraction_client = HttpTextExtractionClient::new(config.extraction)?;

    tracing::info!(
        items = catalog.ranges().len(),
        rules = catalog.rules().len(),
        "reference catalog loaded"
    );

    Service::new(catalog, extraction_client, CsvTableDecoder::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analysis::{ports::AnalysisService, value_objects::AnalysisSource},
        common::ExtractionConfig,
        evaluation::entities::Status,
    };

    fn config() -> BloodlensConfig {
        BloodlensConfig {
            extraction: ExtractionConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_csv_upload_end_to_end() {
        let service = create_service(config()).unwrap();
        let csv = "項目,結果\nヘモグロビン,12.0\nAST,測定不可\nALT,30\n";

        let result = service
            .analyze(AnalysisSource::Table(csv.as_bytes().to_vec()))
            .await
            .unwrap();

        assert_eq!(result.analysis.len(), 2);
        assert_eq!(result.analysis[0].status, Status::Below);
        assert_eq!(result.analysis[1].item, "ALT");
        assert!(result.recommendations.contains_key("鉄分"));
    }

    #[tokio::test]
    async fn test_csv_missing_result_column_end_to_end() {
        let service = create_service(config()).unwrap();

        let result = service
            .analyze(AnalysisSource::Table("項目,単位\nAST,U/L\n".as_bytes().to_vec()))
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
