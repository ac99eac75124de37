use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, ingestion::entities::Table};

/// External OCR / PDF text extraction collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractionClient: Send + Sync {
    fn image_to_text(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn pdf_to_text(
        &self,
        document_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Decoder for uploaded tabular files.
#[cfg_attr(test, mockall::automock)]
pub trait TableDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Table, CoreError>;
}
