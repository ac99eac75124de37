use tracing::{Instrument, info_span, warn};

use crate::domain::{
    analysis::{
        entities::AnalysisResult, pipeline::assemble, ports::AnalysisService,
        value_objects::AnalysisSource,
    },
    common::{entities::app_errors::CoreError, services::Service},
    ingestion::{
        ports::{TableDecoder, TextExtractionClient},
        table_ingester::{ingest_entries, ingest_table},
    },
    reading::entities::Reading,
};

impl<X, T> Service<X, T>
where
    X: TextExtractionClient,
    T: TableDecoder,
{
    async fn ingest(&self, source: AnalysisSource) -> Result<Vec<Reading>, CoreError> {
        match source {
            AnalysisSource::Direct(entries) => ingest_entries(entries),
            AnalysisSource::Table(data) => {
                let table = self.table_decoder.decode(&data)?;
                ingest_table(&table)
            }
            AnalysisSource::Image(data) => {
                let text = self.extraction_client.image_to_text(data).await?;
                self.text_normalizer.normalize(&text)
            }
            AnalysisSource::Pdf(data) => {
                let text = self.extraction_client.pdf_to_text(data).await?;
                self.text_normalizer.normalize(&text)
            }
        }
    }
}

impl<X, T> AnalysisService for Service<X, T>
where
    X: TextExtractionClient,
    T: TableDecoder,
{
    async fn analyze(&self, source: AnalysisSource) -> Result<AnalysisResult, CoreError> {
        let span = info_span!("analyze", source = source.kind());

        async move {
            let readings = self.ingest(source).await.inspect_err(|e| {
                warn!(error = %e, "ingestion failed");
            })?;

            Ok(assemble(&self.catalog, &readings))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        catalog::{
            entities::ReferenceCatalog,
            standard::{ALT, AST, DIETARY_FIBER, HEMOGLOBIN, IRON, TOTAL_CHOLESTEROL},
        },
        evaluation::entities::Status,
        ingestion::{
            entities::Table,
            ports::{MockTableDecoder, MockTextExtractionClient},
            table_ingester::INVALID_FILE_MESSAGE,
            text_normalizer::NO_DATA_MESSAGE,
        },
    };

    fn service(
        extraction_client: MockTextExtractionClient,
        table_decoder: MockTableDecoder,
    ) -> Service<MockTextExtractionClient, MockTableDecoder> {
        let catalog = Arc::new(ReferenceCatalog::standard().unwrap());
        Service::new(catalog, extraction_client, table_decoder).unwrap()
    }

    fn idle_service() -> Service<MockTextExtractionClient, MockTableDecoder> {
        service(MockTextExtractionClient::new(), MockTableDecoder::new())
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_direct_low_hemoglobin() {
        let result = idle_service()
            .analyze(AnalysisSource::Direct(vec![Reading::new(HEMOGLOBIN, 12.0)]))
            .await
            .unwrap();

        assert_eq!(result.analysis.len(), 1);
        assert_eq!(result.analysis[0].status, Status::Below);
        assert_eq!(
            result.recommendations.get(IRON).unwrap(),
            &vec!["ほうれん草", "レバー", "ひじき", "あさり"]
        );
    }

    #[tokio::test]
    async fn test_direct_normal_cholesterol_has_no_recommendations() {
        let result = idle_service()
            .analyze(AnalysisSource::Direct(vec![Reading::new(
                TOTAL_CHOLESTEROL,
                150.0,
            )]))
            .await
            .unwrap();

        assert_eq!(result.analysis[0].status, Status::Within);
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_image_text_with_ast_and_alt() {
        let mut extraction_client = MockTextExtractionClient::new();
        extraction_client
            .expect_image_to_text()
            .times(1)
            .returning(|_| Box::pin(async { Ok("AST 25\nALT 9999\n".to_string()) }));

        let result = service(extraction_client, MockTableDecoder::new())
            .analyze(AnalysisSource::Image(vec![0x89, 0x50, 0x4e, 0x47]))
            .await
            .unwrap();

        assert_eq!(result.analysis.len(), 2);
        assert_eq!(result.analysis[0].item, AST);
        assert_eq!(result.analysis[0].status, Status::Within);
        assert_eq!(result.analysis[1].item, ALT);
        assert_eq!(result.analysis[1].status, Status::Above);
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_pdf_text_without_known_items_fails() {
        let mut extraction_client = MockTextExtractionClient::new();
        extraction_client
            .expect_pdf_to_text()
            .times(1)
            .returning(|_| Box::pin(async { Ok("健康診断のお知らせ".to_string()) }));

        let result = service(extraction_client, MockTableDecoder::new())
            .analyze(AnalysisSource::Pdf(b"%PDF-1.7".to_vec()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Extraction(NO_DATA_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_propagates() {
        let mut extraction_client = MockTextExtractionClient::new();
        extraction_client.expect_pdf_to_text().returning(|_| {
            Box::pin(async { Err(CoreError::Extraction("sidecar unavailable".to_string())) })
        });

        let result = service(extraction_client, MockTableDecoder::new())
            .analyze(AnalysisSource::Pdf(vec![]))
            .await;

        assert!(matches!(result, Err(CoreError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_table_missing_result_column_fails() {
        let mut table_decoder = MockTableDecoder::new();
        table_decoder
            .expect_decode()
            .times(1)
            .returning(|_| Ok(table(&["項目"], &[&["AST"]])));

        let result = service(MockTextExtractionClient::new(), table_decoder)
            .analyze(AnalysisSource::Table("項目\nAST\n".as_bytes().to_vec()))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Validation(INVALID_FILE_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_table_with_all_lipids_high_yields_single_fiber_entry() {
        let mut table_decoder = MockTableDecoder::new();
        table_decoder.expect_decode().returning(|_| {
            Ok(table(
                &["項目", "結果"],
                &[
                    &["総コレステロール", "250"],
                    &["LDLコレステロール", "180"],
                    &["中性脂肪", "300"],
                    &["尿酸", "9.0"],
                ],
            ))
        });

        let result = service(MockTextExtractionClient::new(), table_decoder)
            .analyze(AnalysisSource::Table(vec![]))
            .await
            .unwrap();

        assert_eq!(result.analysis.len(), 3);
        assert!(result.analysis.iter().all(|r| r.status == Status::Above));
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations.contains_key(DIETARY_FIBER));
    }

    #[tokio::test]
    async fn test_analyze_twice_is_byte_identical() {
        let service = idle_service();
        let source = AnalysisSource::Direct(vec![
            Reading::new(HEMOGLOBIN, 11.0),
            Reading::new(TOTAL_CHOLESTEROL, 240.0),
        ]);

        let first = service.analyze(source.clone()).await.unwrap();
        let second = service.analyze(source).await.unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
