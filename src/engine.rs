use crate::error::AppError;
use std::path::Path;

/// Trait that all OCR backends must implement
pub trait OcrEngine: Send + Sync {
    /// Returns the backend identifier (e.g., "tesseract", "ocrs")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the backend
    fn description(&self) -> &'static str;

    /// Recognize the text in an image file.
    ///
    /// `language` is the backend's own language code (the table's
    /// `ocr_code`). A single blocking call; no retries, no timeout.
    fn recognize(&self, path: &Path, language: &str) -> Result<String, AppError>;

    /// Get supported language codes
    fn supported_languages(&self) -> Vec<String>;
}

/// Load an image for recognition, checking the path first.
///
/// The existence check runs before any decoding so a bad path fails with
/// FileNotFound rather than a decode error.
pub(crate) fn load_image(path: &Path) -> Result<image::DynamicImage, AppError> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }
    image::open(path)
        .map_err(|e| AppError::RecognitionError(format!("Failed to load image: {}", e)))
}
