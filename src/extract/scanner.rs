use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Files found under a source root, sorted by relative path.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub message_files: Vec<SourceFile>,
    pub component_files: Vec<SourceFile>,
    /// Entries the walker could not access.
    pub skipped_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Relative to the source root, `/`-separated.
    pub relative: String,
    pub path: PathBuf,
}

fn compile_patterns(field: &str, patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                Error::Config(format!("invalid glob in '{}': \"{}\" ({})", field, p, e))
            })
        })
        .collect()
}

pub fn scan_files(source_root: &Path, config: &Config) -> Result<ScanResult> {
    let message_patterns = compile_patterns("messageIncludes", &config.message_includes)?;
    let component_patterns = compile_patterns("componentIncludes", &config.component_includes)?;
    let ignore_patterns = compile_patterns("ignores", &config.ignores)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                tracing::warn!(error = %e, "cannot access path");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(relative) = relative_path(source_root, path) else {
            continue;
        };

        if ignore_patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
        {
            continue;
        }

        let file = SourceFile {
            relative,
            path: path.to_path_buf(),
        };
        if matches_any(&message_patterns, &file.relative) {
            result.message_files.push(file);
        } else if matches_any(&component_patterns, &file.relative) {
            result.component_files.push(file);
        }
    }

    result.message_files.sort();
    result.component_files.sort();
    Ok(result)
}

fn matches_any(patterns: &[Pattern], relative: &str) -> bool {
    patterns
        .iter()
        .any(|p| p.matches_with(relative, MATCH_OPTIONS))
}

/// `/`-joined path of `path` relative to `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
