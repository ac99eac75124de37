use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::HealthApiDoc, reference::router::ReferenceApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bloodlens API",
        description = "Evaluates blood test results against reference ranges and suggests foods for abnormal values."
    ),
    tags(
        (name = "analysis", description = "Blood test analysis"),
        (name = "reference", description = "Reference range catalog"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(AnalysisApiDoc::openapi());
        openapi.merge(ReferenceApiDoc::openapi());
        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_document_lists_every_route() {
        let openapi = ApiDoc::merged();
        for path in ["/", "/analyze_direct", "/upload", "/reference-ranges"] {
            assert!(
                openapi.paths.paths.contains_key(path),
                "missing path {path}"
            );
        }
    }
}
