use super::handlers::{
    analyze_direct::{__path_analyze_direct, analyze_direct},
    upload_file::{__path_upload_file, upload_file},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Room left for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_direct, upload_file))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let body_limit = state
        .args
        .server
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route(
            &format!("{}/analyze_direct", state.args.server.root_path),
            post(analyze_direct),
        )
        .route(
            &format!("{}/upload", state.args.server.root_path),
            post(upload_file).layer(DefaultBodyLimit::max(body_limit)),
        )
}
