use std::sync::Arc;

use crate::domain::{
    catalog::entities::ReferenceCatalog,
    common::entities::app_errors::CoreError,
    ingestion::{
        ports::{TableDecoder, TextExtractionClient},
        text_normalizer::TextNormalizer,
    },
};

/// Request-independent state shared by every analysis.
///
/// Everything behind the `Arc`s is read-only once constructed, so a `Service`
/// can be cloned into each request handler without synchronization.
pub struct Service<X, T>
where
    X: TextExtractionClient,
    T: TableDecoder,
{
    pub(crate) catalog: Arc<ReferenceCatalog>,
    pub(crate) text_normalizer: Arc<TextNormalizer>,
    pub(crate) extraction_client: Arc<X>,
    pub(crate) table_decoder: Arc<T>,
}

impl<X, T> Service<X, T>
where
    X: TextExtractionClient,
    T: TableDecoder,
{
    pub fn new(
        catalog: Arc<ReferenceCatalog>,
        extraction_client: X,
        table_decoder: T,
    ) -> Result<Self, CoreError> {
        let text_normalizer = TextNormalizer::new(&catalog)?;

        Ok(Self {
            catalog,
            text_normalizer: Arc::new(text_normalizer),
            extraction_client: Arc::new(extraction_client),
            table_decoder: Arc::new(table_decoder),
        })
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }
}

impl<X, T> Clone for Service<X, T>
where
    X: TextExtractionClient,
    T: TableDecoder,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            text_normalizer: Arc::clone(&self.text_normalizer),
            extraction_client: Arc::clone(&self.extraction_client),
            table_decoder: Arc::clone(&self.table_decoder),
        }
    }
}
