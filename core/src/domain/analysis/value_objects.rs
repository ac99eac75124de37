use crate::domain::{common::entities::app_errors::CoreError, reading::entities::Reading};

pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "対応していないファイル形式です。";

/// Upload category, decided once from the file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Image,
    Pdf,
    Unsupported,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.trim().to_lowercase();

        if lower.ends_with(".csv") {
            UploadKind::Csv
        } else if [".png", ".jpg", ".jpeg"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            UploadKind::Image
        } else if lower.ends_with(".pdf") {
            UploadKind::Pdf
        } else {
            UploadKind::Unsupported
        }
    }
}

/// Already-decided ingestion path handed to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisSource {
    Direct(Vec<Reading>),
    Table(Vec<u8>),
    Image(Vec<u8>),
    Pdf(Vec<u8>),
}

impl AnalysisSource {
    pub fn from_upload(kind: UploadKind, data: Vec<u8>) -> Result<Self, CoreError> {
        match kind {
            UploadKind::Csv => Ok(AnalysisSource::Table(data)),
            UploadKind::Image => Ok(AnalysisSource::Image(data)),
            UploadKind::Pdf => Ok(AnalysisSource::Pdf(data)),
            UploadKind::Unsupported => Err(CoreError::UnsupportedFormat(
                UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            )),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisSource::Direct(_) => "direct",
            AnalysisSource::Table(_) => "table",
            AnalysisSource::Image(_) => "image",
            AnalysisSource::Pdf(_) => "pdf",
        }
    }
}
