use axum::extract::State;
use bloodlens_core::domain::analysis::{
    entities::AnalysisResult, ports::AnalysisService, value_objects::AnalysisSource,
};

use crate::application::http::{
    analysis::validators::AnalyzeDirectRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ApiJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze_direct",
    tag = "analysis",
    summary = "Analyze blood test values",
    description = "Evaluates the given item values against the reference ranges and recommends foods for abnormal findings",
    request_body = AnalyzeDirectRequest,
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, description = "Malformed or empty data", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_direct(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AnalyzeDirectRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze(AnalysisSource::Direct(payload.into_readings()))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
