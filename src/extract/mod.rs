//! Extraction phase: source tree -> [`TranslationCatalog`].
//!
//! ## Module Structure
//!
//! - `classify`: heuristic deciding whether a literal is user-facing text
//! - `template`: candidate search inside component templates
//! - `messages`: flattening of existing base-locale message catalogs
//! - `scanner`: source-tree walk selecting catalogs and components

pub mod classify;
pub mod messages;
pub mod scanner;
pub mod template;

use std::{collections::HashMap, fs, path::Path};

use rayon::prelude::*;

pub use classify::classify;
pub use messages::extract_from_message_catalog;
pub use template::extract_from_template;

use crate::catalog::{FileEntries, TranslationCatalog};
use crate::config::Config;
use crate::error::{Error, Result};
use scanner::{SourceFile, scan_files};

/// Counters reported after a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionStats {
    pub message_files: usize,
    pub component_files: usize,
    pub component_strings: usize,
    /// Files that could not be read or parsed.
    pub failed_files: usize,
    /// Paths the walker could not access.
    pub skipped_paths: usize,
    /// Component keys replaced by a later file with the same stem.
    pub overwritten_keys: usize,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub catalog: TranslationCatalog,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn total_keys(&self) -> usize {
        crate::catalog::count_keys(&self.catalog)
    }
}

/// Outcome of extracting one file.
enum FileOutcome {
    Entries(FileEntries),
    Failed,
}

pub struct Extractor {
    config: Config,
}

impl Extractor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk `source_root` and build a fresh catalog.
    ///
    /// Existing message catalogs keep their relative path. Strings from all
    /// component files are merged into the configured component catalog.
    pub fn scan(&self, source_root: &Path) -> Result<Extraction> {
        if !source_root.exists() {
            return Err(Error::SourceNotFound(source_root.to_path_buf()));
        }

        let files = scan_files(source_root, &self.config)?;
        tracing::info!(
            message_files = files.message_files.len(),
            component_files = files.component_files.len(),
            "scanned {}",
            source_root.display()
        );

        let mut extraction = Extraction::default();
        extraction.stats.skipped_paths = files.skipped_count;

        let message_results: Vec<_> = files
            .message_files
            .par_iter()
            .map(extract_message_file)
            .collect();

        for (file, outcome) in files.message_files.iter().zip(message_results) {
            match outcome {
                FileOutcome::Entries(entries) => {
                    extraction.stats.message_files += 1;
                    if !entries.is_empty() {
                        extraction.catalog.insert(file.relative.clone(), entries);
                    }
                }
                FileOutcome::Failed => extraction.stats.failed_files += 1,
            }
        }

        let component_results: Vec<_> = files
            .component_files
            .par_iter()
            .map(extract_component_file)
            .collect();

        let mut component_entries = FileEntries::new();
        let mut key_owners: HashMap<String, &str> = HashMap::new();
        for (file, outcome) in files.component_files.iter().zip(component_results) {
            match outcome {
                FileOutcome::Entries(entries) => {
                    extraction.stats.component_files += 1;
                    if entries.is_empty() {
                        continue;
                    }
                    tracing::debug!(file = %file.relative, strings = entries.len(), "extracted");
                    extraction.stats.component_strings += entries.len();
                    for key in entries.keys() {
                        if let Some(previous) = key_owners.insert(key.clone(), &file.relative) {
                            tracing::warn!(
                                key = %key,
                                previous = %previous,
                                file = %file.relative,
                                "component key already extracted from another file, overwriting"
                            );
                            extraction.stats.overwritten_keys += 1;
                        }
                    }
                    component_entries.extend(entries);
                }
                FileOutcome::Failed => extraction.stats.failed_files += 1,
            }
        }

        if !component_entries.is_empty() {
            extraction
                .catalog
                .entry(self.config.component_catalog.clone())
                .or_default()
                .extend(component_entries);
        }

        Ok(extraction)
    }
}

fn extract_message_file(file: &SourceFile) -> FileOutcome {
    let Some(content) = read_source(file) else {
        return FileOutcome::Failed;
    };
    match serde_json::from_str(&content) {
        Ok(value) => FileOutcome::Entries(messages::flatten_messages(&value)),
        Err(e) => {
            tracing::warn!(file = %file.relative, error = %e, "failed to parse message catalog");
            FileOutcome::Failed
        }
    }
}

fn extract_component_file(file: &SourceFile) -> FileOutcome {
    match read_source(file) {
        Some(content) => FileOutcome::Entries(extract_from_template(&content, &file.relative)),
        None => FileOutcome::Failed,
    }
}

fn read_source(file: &SourceFile) -> Option<String> {
    match fs::read_to_string(&file.path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!(file = %file.relative, error = %e, "failed to read file");
            None
        }
    }
}
