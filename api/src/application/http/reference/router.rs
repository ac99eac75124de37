use super::handlers::get_reference_ranges::{__path_get_reference_ranges, get_reference_ranges};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_reference_ranges))]
pub struct ReferenceApiDoc;

pub fn reference_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/reference-ranges", state.args.server.root_path),
        get(get_reference_ranges),
    )
}
