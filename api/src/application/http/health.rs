use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

pub const SERVICE_MESSAGE: &str = "血液データ分析API";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness message",
    responses(
        (status = 200, body = RootResponse)
    ),
)]
pub async fn root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: SERVICE_MESSAGE.to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(root))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new().route(&path, get(root))
}
