use bloodlens_core::domain::common::{BloodlensConfig, ExtractionConfig};
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "bloodlens", version, about = "Blood test analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub extraction: ExtractionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8888)]
    pub port: u16,

    /// Prefix for every route, e.g. `/.netlify/functions/main`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated origins, `*` mirrors the request origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ExtractionArgs {
    /// Base URL of the OCR / PDF text extraction service.
    #[arg(long, env = "EXTRACTION_ENDPOINT")]
    pub extraction_endpoint: Option<String>,

    #[arg(long, env = "OCR_LANGUAGE", default_value = "jpn")]
    pub ocr_language: String,

    #[arg(long, env = "EXTRACTION_TIMEOUT_SECS", default_value_t = 30)]
    pub extraction_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for BloodlensConfig {
    fn from(args: Args) -> Self {
        Self {
            extraction: ExtractionConfig {
                endpoint: args.extraction.extraction_endpoint,
                ocr_language: args.extraction.ocr_language,
                timeout_secs: args.extraction.extraction_timeout_secs,
            },
        }
    }
}
