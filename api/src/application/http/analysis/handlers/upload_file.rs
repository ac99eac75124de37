use axum::extract::{Multipart, State};
use bloodlens_core::domain::analysis::{
    entities::AnalysisResult,
    ports::AnalysisService,
    value_objects::{AnalysisSource, UploadKind},
};
use tracing::{error, info, warn};

use crate::application::http::{
    analysis::validators::UploadFileForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "analysis",
    summary = "Analyze an uploaded blood test file",
    description = "Accepts a CSV with 項目/結果 columns, a scanned image or a PDF report. Images and PDFs are converted to text by the extraction service before analysis.",
    request_body(content = UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, description = "Missing file or invalid CSV layout", body = ApiErrorResponse),
        (status = 413, description = "File too large", body = ApiErrorResponse),
        (status = 415, description = "Unsupported file type", body = ApiErrorResponse),
        (status = 422, description = "No data could be extracted", body = ApiErrorResponse)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResult>, ApiError> {
    let max_upload_bytes = state.args.server.max_upload_bytes;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Missing filename in file field".to_string()))?;

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::from(e)
        })?;

        if data.is_empty() {
            warn!(filename = %filename, "Empty file upload attempted");
            return Err(ApiError::BadRequest("File cannot be empty".to_string()));
        }

        if data.len() > max_upload_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "File too large. Max size is {} bytes",
                max_upload_bytes
            )));
        }

        upload = Some((filename, data.to_vec()));
    }

    let (filename, data) = upload.ok_or_else(|| {
        ApiError::BadRequest("Missing 'file' field in multipart form".to_string())
    })?;

    let kind = UploadKind::from_filename(&filename);
    info!(filename = %filename, kind = ?kind, size = data.len(), "analyzing upload");

    let source = AnalysisSource::from_upload(kind, data).map_err(ApiError::from)?;

    let result = state
        .service
        .analyze(source)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
