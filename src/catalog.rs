//! Catalog data model and the JSON artifacts exchanged between phases.
//!
//! All maps are insertion-ordered so that key order survives extraction,
//! translation and writing.

use std::{fs, path::Path};

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Translation key -> source (or translated) text for one file.
pub type FileEntries = IndexMap<String, String>;

/// Relative file path -> entries. Files without entries are never present.
pub type TranslationCatalog = IndexMap<String, FileEntries>;

/// Target language tag -> catalog holding translated text.
pub type LocalizedResults = IndexMap<String, TranslationCatalog>;

/// Number of keys listed per file in the extraction summary.
const SAMPLE_KEY_COUNT: usize = 5;

/// One value in an on-disk message catalog: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub message: String,
}

/// On-disk message catalog for one language: key -> `{message}`.
pub type MessageCatalogFile = IndexMap<String, MessageEntry>;

/// Wrap flat entries into the message-catalog file shape.
pub fn to_message_catalog(entries: &FileEntries) -> MessageCatalogFile {
    entries
        .iter()
        .map(|(key, text)| {
            (
                key.clone(),
                MessageEntry {
                    message: text.clone(),
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub key_count: usize,
    pub sample_keys: Vec<String>,
}

/// The intermediate artifact written by `extract` and read by `translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub timestamp: String,
    pub source_path: String,
    pub summary: IndexMap<String, FileSummary>,
    pub details: TranslationCatalog,
    pub total_keys: usize,
    pub file_count: usize,
}

impl ExtractionReport {
    pub fn new(source_path: &Path, catalog: TranslationCatalog) -> Self {
        let summary = catalog
            .iter()
            .map(|(file, entries)| {
                (
                    file.clone(),
                    FileSummary {
                        key_count: entries.len(),
                        sample_keys: entries.keys().take(SAMPLE_KEY_COUNT).cloned().collect(),
                    },
                )
            })
            .collect();

        Self {
            timestamp: now_timestamp(),
            source_path: source_path.to_string_lossy().into_owned(),
            summary,
            total_keys: count_keys(&catalog),
            file_count: catalog.len(),
            details: catalog,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    pub files_translated: usize,
    pub total_translations: usize,
}

/// Written next to the input artifact after a `translate` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReport {
    pub timestamp: String,
    pub languages: Vec<String>,
    pub total_keys: usize,
    pub files_processed: usize,
    pub language_stats: IndexMap<String, LanguageStats>,
}

impl TranslationReport {
    pub fn new(results: &LocalizedResults, source: &TranslationCatalog) -> Self {
        let language_stats = results
            .iter()
            .map(|(lang, catalog)| {
                (
                    lang.clone(),
                    LanguageStats {
                        files_translated: catalog.len(),
                        total_translations: count_keys(catalog),
                    },
                )
            })
            .collect();

        Self {
            timestamp: now_timestamp(),
            languages: results.keys().cloned().collect(),
            total_keys: count_keys(source),
            files_processed: source.len(),
            language_stats,
        }
    }
}

pub fn count_keys(catalog: &TranslationCatalog) -> usize {
    catalog.values().map(IndexMap::len).sum()
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Read a catalog artifact.
///
/// Accepts the full [`ExtractionReport`] shape (reading `details`) as well
/// as a bare [`TranslationCatalog`].
pub fn read_catalog_artifact(path: &Path) -> Result<TranslationCatalog> {
    if !path.exists() {
        return Err(Error::ArtifactNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;
    parse_catalog_value(value)
}

fn parse_catalog_value(value: Value) -> Result<TranslationCatalog> {
    let catalog = match value {
        Value::Object(mut map) => match map.remove("details") {
            Some(details) => details,
            None => Value::Object(map),
        },
        other => {
            return Err(Error::InvalidArtifact(format!(
                "expected a JSON object at the root, found {}",
                json_kind(&other)
            )));
        }
    };

    serde_json::from_value(catalog).map_err(|e| Error::InvalidArtifact(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serialize with 2-space indentation and a trailing newline, creating
/// parent directories as needed.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    fs::write(path, format!("{}\n", content)).map_err(|e| Error::io(path, e))
}
