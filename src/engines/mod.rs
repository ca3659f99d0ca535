//! OCR backend implementations
//!
//! This module contains implementations of the OcrEngine trait for different
//! OCR backends. Backends are conditionally compiled based on feature flags.

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

#[cfg(feature = "engine-ocrs")]
pub mod ocrs;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::AppError;
use std::sync::Arc;

/// Registry of available OCR backends
pub struct EngineRegistry {
    engines: Vec<Arc<dyn OcrEngine>>,
}

impl EngineRegistry {
    /// Create a new registry with all compiled-in backends initialized
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut engines: Vec<Arc<dyn OcrEngine>> = Vec::new();

        #[cfg(feature = "engine-tesseract")]
        {
            tracing::info!("Initializing tesseract backend...");
            engines.push(Arc::new(tesseract::TesseractEngine::new(config)?));
        }

        #[cfg(feature = "engine-ocrs")]
        {
            tracing::info!("Initializing ocrs backend...");
            engines.push(Arc::new(ocrs::OcrsEngine::new(config)?));
        }

        #[cfg(not(any(feature = "engine-tesseract", feature = "engine-ocrs")))]
        let _ = config;

        if engines.is_empty() {
            return Err(AppError::BackendUnavailable(
                "No OCR backends compiled in. Build with --features engine-tesseract or --features engine-ocrs".to_string()
            ));
        }

        Ok(Self { engines })
    }

    /// Select a backend by name.
    ///
    /// The caller is expected to treat a miss as fatal: show the notice and
    /// exit with status 1.
    pub fn select(&self, name: &str) -> Result<Arc<dyn OcrEngine>, AppError> {
        self.engines
            .iter()
            .find(|e| e.name() == name)
            .cloned()
            .ok_or_else(|| {
                AppError::BackendUnavailable(format!(
                    "No OCR backend named '{}' (available: {})",
                    name,
                    self.list().join(", ")
                ))
            })
    }

    /// List all available backend names
    pub fn list(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }
}
