use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No OCR backend available: {0}")]
    BackendUnavailable(String),

    #[error("Failed to initialize OCR engine: {0}")]
    InitializationError(String),

    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to recognize text: {0}")]
    RecognitionError(String),

    #[error("Invalid language table: {0}")]
    LanguageTableError(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Failed to open browser: {0}")]
    BrowserError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
