//! Screen flow controller
//!
//! A finite screen controller driven by event enums, decoupled from any
//! rendering toolkit. A frontend renders a screen and blocks until the user
//! produces the next event; the controller owns the transitions:
//!
//! input screen → (Submit) recognize → result screen → (Translate) open
//! browser, stay on result → (Close) back to input → (Close) done.
//!
//! A recognition failure is not caught here; it propagates out of the
//! controller and ends the program.

use crate::engine::OcrEngine;
use crate::error::AppError;
use crate::lang::LanguageTable;
use crate::translate;
use std::path::PathBuf;

/// Events the input screen can produce
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Run recognition on the given image with the named language
    Submit { path: PathBuf, language: String },
    /// Dismiss the screen, ending the program
    Close,
}

/// Events the result screen can produce
#[derive(Debug, Clone, Copy)]
pub enum ResultEvent {
    /// Open the translator with the recognized text
    Translate { strip_line_breaks: bool },
    /// Dismiss the screen, returning to the input screen
    Close,
}

/// Renders screens and blocks for the next user event.
pub trait Frontend {
    /// Show the input screen and wait for an event.
    ///
    /// `languages` is the table's display names in order; the first one is
    /// the default selection.
    fn input_screen(&mut self, languages: &[&str]) -> Result<InputEvent, AppError>;

    /// Show the recognized text and wait for an event.
    fn result_screen(&mut self, text: &str) -> Result<ResultEvent, AppError>;
}

/// Abstracts the OS browser-open facility.
pub trait BrowserOpener {
    /// Hand a URL to the default browser. Fire-and-forget: success of the
    /// browser itself is never confirmed, only the launch.
    fn open(&self, url: &str) -> Result<(), AppError>;
}

/// Opens URLs in the system default browser.
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        open::that(url).map_err(|e| AppError::BrowserError(e.to_string()))
    }
}

/// Drive the two-screen flow until the input screen is dismissed.
pub fn run(
    table: &LanguageTable,
    engine: &dyn OcrEngine,
    frontend: &mut dyn Frontend,
    browser: &dyn BrowserOpener,
) -> Result<(), AppError> {
    loop {
        let names = table.names();
        match frontend.input_screen(&names)? {
            InputEvent::Close => return Ok(()),
            InputEvent::Submit { path, language } => {
                let source = table
                    .get(&language)
                    .ok_or_else(|| AppError::UnknownLanguage(language.clone()))?;

                tracing::info!(
                    "Recognizing {} (language: {}, backend: {})",
                    path.display(),
                    source.ocr_code,
                    engine.name()
                );
                let text = engine.recognize(&path, &source.ocr_code)?;
                tracing::debug!("Recognized {} chars", text.chars().count());

                let target = table.counterpart(&source.name);

                loop {
                    match frontend.result_screen(&text)? {
                        ResultEvent::Close => break,
                        ResultEvent::Translate { strip_line_breaks } => {
                            let url =
                                translate::build_url(source, target, &text, strip_line_breaks);
                            tracing::info!("Opening translator: {} -> {}", source.name, target.name);
                            browser.open(&url)?;
                        }
                    }
                }
            }
        }
    }
}
