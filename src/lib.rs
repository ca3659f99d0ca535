//! OCR an image, then open the DeepL web translator with the result.
//!
//! The pieces: a language table loaded once from `lang.json`, an OCR
//! backend selected by name from the compiled-in engines, and a two-screen
//! flow (input → result) driven by a toolkit-agnostic controller.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod flow;
pub mod lang;
pub mod translate;
pub mod ui;
