use std::time::Duration;

use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{ExtractionConfig, entities::app_errors::CoreError},
    ingestion::ports::TextExtractionClient,
};

/// Talks to an OCR / PDF text extraction sidecar over HTTP.
///
/// Images go to `{endpoint}/ocr?lang={language}` and documents to `{endpoint}/pdf`;
/// both answer `{"text": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpTextExtractionClient {
    endpoint: Option<String>,
    language: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ExtractionResponse {
    text: String,
}

impl HttpTextExtractionClient {
    pub fn new(config: ExtractionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build extraction HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self::with_client(config, client))
    }

    fn with_client(config: ExtractionConfig, client: Client) -> Self {
        let endpoint = config
            .endpoint
            .map(|endpoint| endpoint.trim().trim_end_matches('/').to_string())
            .filter(|endpoint| !endpoint.is_empty());

        if endpoint.is_none() {
            tracing::warn!("No extraction endpoint configured, image and PDF uploads are disabled");
        }

        Self {
            endpoint,
            language: config.ocr_language,
            client,
        }
    }

    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn extract(
        &self,
        path: &str,
        content_type: &'static str,
        data: Vec<u8>,
    ) -> Result<String, CoreError> {
        let endpoint = self.endpoint.as_ref().ok_or_else(|| {
            CoreError::Extraction("テキスト抽出サービスが設定されていません。".to_string())
        })?;

        let url = format!("{}{}", endpoint, path);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Extraction request failed: {}", e);
                CoreError::Extraction(format!("Text extraction request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Extraction service error: {} - {}", status, error_text);
            return Err(CoreError::Extraction(format!(
                "Text extraction returned error: {}",
                status
            )));
        }

        let body: ExtractionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse extraction response: {}", e);
            CoreError::Extraction(format!("Failed to parse extraction response: {}", e))
        })?;

        tracing::debug!(chars = body.text.chars().count(), "text extracted");

        Ok(body.text)
    }
}

impl TextExtractionClient for HttpTextExtractionClient {
    async fn image_to_text(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        let path = format!("/ocr?lang={}", self.language);
        self.extract(&path, "application/octet-stream", image_data)
            .await
    }

    async fn pdf_to_text(&self, document_data: Vec<u8>) -> Result<String, CoreError> {
        self.extract("/pdf", "application/pdf", document_data).await
    }
}
