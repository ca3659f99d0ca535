use std::path::PathBuf;

/// Runtime configuration, built from the parsed CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the language table file
    pub lang_file: PathBuf,
    /// Name of the OCR backend to use
    pub engine: String,
    /// Optional override for the tessdata directory
    pub tessdata_path: Option<String>,
}
