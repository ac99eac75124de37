pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct BloodlensConfig {
    pub extraction: ExtractionConfig,
}

#[derive(Clone, Debug)]
pub struct ExtractionConfig {
    /// Base URL of the OCR/PDF text extraction sidecar. `None` disables image and PDF uploads.
    pub endpoint: Option<String>,
    pub ocr_language: String,
    pub timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            ocr_language: "jpn".to_string(),
            timeout_secs: 30,
        }
    }
}
