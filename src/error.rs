use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SuiteError>;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Download failed: {url}")]
    DownloadError { url: String },

    #[error("Extraction failed: {path}")]
    ExtractionError { path: PathBuf },

    #[error("Unsupported archive format: {name}")]
    UnsupportedArchive { name: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
