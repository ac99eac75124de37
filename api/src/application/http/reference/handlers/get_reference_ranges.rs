use axum::extract::State;
use bloodlens_core::domain::catalog::entities::ReferenceRange;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReferenceRangeResponse {
    pub item: String,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    /// Same text used in the `基準値` field of analysis results.
    pub display: String,
}

impl From<&ReferenceRange> for ReferenceRangeResponse {
    fn from(range: &ReferenceRange) -> Self {
        Self {
            item: range.item.clone(),
            min: range.min,
            max: range.max,
            unit: range.unit.clone(),
            display: range.display(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetReferenceRangesResponse {
    pub data: Vec<ReferenceRangeResponse>,
}

#[utoipa::path(
    get,
    path = "/reference-ranges",
    tag = "reference",
    summary = "List the reference ranges used for evaluation",
    responses(
        (status = 200, body = GetReferenceRangesResponse)
    ),
)]
pub async fn get_reference_ranges(
    State(state): State<AppState>,
) -> Result<Response<GetReferenceRangesResponse>, ApiError> {
    let data = state
        .service
        .catalog()
        .ranges()
        .iter()
        .map(ReferenceRangeResponse::from)
        .collect();

    Ok(Response::OK(GetReferenceRangesResponse { data }))
}
