use std::future::Future;

use crate::domain::{
    analysis::{entities::AnalysisResult, value_objects::AnalysisSource},
    common::entities::app_errors::CoreError,
};

/// Service trait for the ingestion → evaluation → recommendation pipeline
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        source: AnalysisSource,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
