//! Language table
//!
//! Loads the static display-name → language-code mapping the tool runs on.
//! The table is read once at startup and passed around as a plain value;
//! nothing mutates it afterwards.

use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;

/// One language known to the tool.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Display name, also the lookup key
    pub name: String,
    /// Code understood by the OCR backend (e.g. "eng", "jpn")
    pub ocr_code: String,
    /// Code understood by the translation site (e.g. "en", "ja")
    pub translator_code: String,
}

/// Ordered, read-only language table.
///
/// Entry order follows the configuration file; the first entry is the
/// default selection on the input screen and the last entry is the pivot
/// language for counterpart resolution.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
}

impl LanguageTable {
    /// Load the table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            AppError::LanguageTableError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    /// Parse the table from a JSON string.
    ///
    /// The file is an object keyed by display name, each value carrying the
    /// name again plus both codes. Key order is preserved.
    pub fn from_json(data: &str) -> Result<Self, AppError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(data)
            .map_err(|e| AppError::LanguageTableError(format!("Malformed JSON: {}", e)))?;

        if raw.is_empty() {
            return Err(AppError::LanguageTableError(
                "Table contains no languages".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let entry: LanguageEntry = serde_json::from_value(value).map_err(|e| {
                AppError::LanguageTableError(format!("Malformed entry for '{}': {}", key, e))
            })?;
            if entry.name != key {
                return Err(AppError::LanguageTableError(format!(
                    "Entry key '{}' does not match its name field '{}'",
                    key, entry.name
                )));
            }
            if entry.ocr_code.is_empty() || entry.translator_code.is_empty() {
                return Err(AppError::LanguageTableError(format!(
                    "Entry '{}' is missing a language code",
                    key
                )));
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Look up an entry by display name.
    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Display names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Default selection for the input screen (first entry).
    pub fn default_entry(&self) -> &LanguageEntry {
        &self.entries[0]
    }

    /// The language to translate into for a given source.
    ///
    /// The last entry is the pivot: every other language translates to it,
    /// and the pivot itself translates to the first entry.
    pub fn counterpart(&self, source: &str) -> &LanguageEntry {
        let pivot = &self.entries[self.entries.len() - 1];
        if source == pivot.name {
            &self.entries[0]
        } else {
            pivot
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "English": {"name": "English", "ocr_code": "eng", "translator_code": "en"},
        "日本語": {"name": "日本語", "ocr_code": "jpn", "translator_code": "ja"}
    }"#;

    #[test]
    fn loads_entries_in_file_order() {
        let table = LanguageTable::from_json(TABLE).unwrap();
        assert_eq!(table.names(), vec!["English", "日本語"]);
        assert_eq!(table.default_entry().name, "English");
    }

    #[test]
    fn every_name_resolves_to_both_codes() {
        let table = LanguageTable::from_json(TABLE).unwrap();
        for name in table.names() {
            let entry = table.get(name).unwrap();
            assert!(!entry.ocr_code.is_empty());
            assert!(!entry.translator_code.is_empty());
        }
    }

    #[test]
    fn counterpart_is_symmetric_for_two_entries() {
        let table = LanguageTable::from_json(TABLE).unwrap();
        assert_eq!(table.counterpart("English").name, "日本語");
        assert_eq!(table.counterpart("日本語").name, "English");
    }

    #[test]
    fn non_pivot_languages_translate_to_pivot() {
        let table = LanguageTable::from_json(
            r#"{
                "English": {"name": "English", "ocr_code": "eng", "translator_code": "en"},
                "Deutsch": {"name": "Deutsch", "ocr_code": "deu", "translator_code": "de"},
                "日本語": {"name": "日本語", "ocr_code": "jpn", "translator_code": "ja"}
            }"#,
        )
        .unwrap();
        assert_eq!(table.counterpart("Deutsch").name, "日本語");
        assert_eq!(table.counterpart("日本語").name, "English");
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            LanguageTable::from_json("{}"),
            Err(AppError::LanguageTableError(_))
        ));
    }

    #[test]
    fn missing_code_is_rejected() {
        let result = LanguageTable::from_json(
            r#"{"English": {"name": "English", "ocr_code": "eng", "translator_code": ""}}"#,
        );
        assert!(matches!(result, Err(AppError::LanguageTableError(_))));
    }

    #[test]
    fn incomplete_entry_is_rejected() {
        let result =
            LanguageTable::from_json(r#"{"English": {"name": "English", "ocr_code": "eng"}}"#);
        assert!(matches!(result, Err(AppError::LanguageTableError(_))));
    }

    #[test]
    fn key_name_mismatch_is_rejected() {
        let result = LanguageTable::from_json(
            r#"{"English": {"name": "Anglais", "ocr_code": "eng", "translator_code": "en"}}"#,
        );
        assert!(matches!(result, Err(AppError::LanguageTableError(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            LanguageTable::from_json("not json"),
            Err(AppError::LanguageTableError(_))
        ));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = LanguageTable::load(Path::new("/nonexistent/lang.json"));
        assert!(matches!(result, Err(AppError::LanguageTableError(_))));
    }

    #[test]
    fn load_reads_a_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lang.json");
        std::fs::write(&path, TABLE).unwrap();
        let table = LanguageTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
    }
}
