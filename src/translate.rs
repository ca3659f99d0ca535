//! Translation URL builder
//!
//! Builds DeepL web translator URLs of the shape
//! `https://www.deepl.com/translator#<src>/<dst>/<percent-encoded text>`.
//! Pure string work; opening the URL is the flow controller's job.

use crate::lang::LanguageEntry;

const DEEPL_BASE_URL: &str = "https://www.deepl.com/translator";

/// Prepare recognized text for embedding in the URL.
///
/// With `strip_line_breaks` set, every newline collapses to a single space.
pub fn prepare_text(text: &str, strip_line_breaks: bool) -> String {
    if strip_line_breaks {
        text.replace('\n', " ")
    } else {
        text.to_string()
    }
}

/// Build the translator URL for a source/target language pair.
pub fn build_url(
    source: &LanguageEntry,
    target: &LanguageEntry,
    text: &str,
    strip_line_breaks: bool,
) -> String {
    let prepared = prepare_text(text, strip_line_breaks);
    let encoded = urlencoding::encode(&prepared);
    format!(
        "{}#{}/{}/{}",
        DEEPL_BASE_URL, source.translator_code, target.translator_code, encoded
    )
}
