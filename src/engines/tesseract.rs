//! Tesseract backend implementation
//!
//! Uses the tesseract-static crate for static linking (no system
//! dependencies). Tessdata (training data) is downloaded per language on
//! first use and cached in the user cache directory.

use crate::config::Config;
use crate::engine::{self, OcrEngine};
use crate::error::AppError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR backend
pub struct TesseractEngine {
    /// Path to the tessdata directory
    tessdata_path: PathBuf,
}

impl TesseractEngine {
    /// Create a new Tesseract backend.
    ///
    /// Validates the installation by doing a test initialization with
    /// English tessdata, downloading it if needed.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let tessdata_path = match &config.tessdata_path {
            Some(path) => PathBuf::from(path),
            None => default_tessdata_dir()?,
        };

        ensure_tessdata_available(&tessdata_path, "eng")?;

        let tessdata = tessdata_dir_str(&tessdata_path)?;
        let test_tess = Tesseract::new(Some(&tessdata), Some("eng")).map_err(|e| {
            AppError::InitializationError(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Tesseract backend initialized (tessdata: {})",
            tessdata_path.display()
        );

        Ok(Self { tessdata_path })
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn description(&self) -> &'static str {
        "Tesseract OCR backend - wide language coverage, good on photos"
    }

    fn recognize(&self, path: &Path, language: &str) -> Result<String, AppError> {
        let img = engine::load_image(path)?;

        ensure_tessdata_available(&self.tessdata_path, language)?;

        // Convert to RGB8 and re-encode as BMP in memory (BMP is always
        // supported by leptonica)
        let rgb_img = img.to_rgb8();
        let (width, height) = rgb_img.dimensions();
        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            rgb_img
                .write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| {
                    AppError::RecognitionError(format!("Failed to convert to BMP: {}", e))
                })?;
        }

        tracing::debug!(
            "Recognizing image: {}x{}, BMP size: {} bytes, language: {}",
            width,
            height,
            bmp_data.len(),
            language
        );

        let tessdata = tessdata_dir_str(&self.tessdata_path)?;
        let mut tess = Tesseract::new(Some(&tessdata), Some(language)).map_err(|e| {
            AppError::RecognitionError(format!("Failed to create Tesseract: {}", e))
        })?;

        tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            AppError::RecognitionError(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        tess = tess
            .recognize()
            .map_err(|e| AppError::RecognitionError(format!("Failed to recognize text: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| AppError::RecognitionError(format!("Failed to get text: {}", e)))?;

        Ok(text.trim().to_string())
    }

    fn supported_languages(&self) -> Vec<String> {
        // Tessdata is fetched on demand, so anything the tessdata_fast repo
        // carries works. Return the codes the shipped table uses plus common
        // ones.
        vec![
            "eng".to_string(),
            "jpn".to_string(),
            "deu".to_string(),
            "fra".to_string(),
            "spa".to_string(),
            "ita".to_string(),
            "por".to_string(),
            "nld".to_string(),
            "chi_sim".to_string(),
            "chi_tra".to_string(),
            "kor".to_string(),
            "rus".to_string(),
        ]
    }
}

// ============================================================================
// Tessdata download helpers
// ============================================================================

/// Default tessdata cache directory
fn default_tessdata_dir() -> Result<PathBuf, AppError> {
    Ok(dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ocr-translate")
        .join("tessdata"))
}

fn tessdata_dir_str(dir: &Path) -> Result<String, AppError> {
    dir.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::InitializationError("Invalid tessdata path".to_string()))
}

/// Ensure tessdata for a language is present, downloading if needed
fn ensure_tessdata_available(dir: &Path, language: &str) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::InitializationError(format!("Failed to create tessdata directory: {}", e))
    })?;

    let traineddata_path = dir.join(format!("{}.traineddata", language));
    if traineddata_path.exists() {
        tracing::debug!("Using cached tessdata from {:?}", traineddata_path);
        return Ok(());
    }

    let url = tessdata_url(language);
    tracing::info!(
        "Downloading tessdata for '{}' (this may take a moment)...",
        language
    );
    download_file(&url, &traineddata_path)?;
    tracing::info!("Downloaded tessdata to {:?}", traineddata_path);

    Ok(())
}

/// Get tessdata download URL for a language
fn tessdata_url(language: &str) -> String {
    // Use tessdata_fast for smaller, faster downloads
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), AppError> {
    let response = ureq::get(url).call().map_err(|e| {
        AppError::InitializationError(format!("Failed to download tessdata: {}", e))
    })?;

    let mut file = File::create(path).map_err(|e| {
        AppError::InitializationError(format!("Failed to create tessdata file: {}", e))
    })?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        AppError::InitializationError(format!("Failed to read tessdata response: {}", e))
    })?;

    file.write_all(&buffer).map_err(|e| {
        AppError::InitializationError(format!("Failed to write tessdata file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tessdata_url_points_at_fast_repo() {
        let url = tessdata_url("jpn");
        assert_eq!(
            url,
            "https://github.com/tesseract-ocr/tessdata_fast/raw/main/jpn.traineddata"
        );
    }
}
