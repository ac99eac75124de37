use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Required columns or fields are absent from structured input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    /// Text-based extraction recovered no usable reading, or the extraction collaborator failed.
    #[error("{0}")]
    Extraction(String),

    #[error("Internal server error")]
    InternalServerError,
}
