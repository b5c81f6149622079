use std::path::PathBuf;

use indexmap::IndexMap;

use crate::cli::exit_status::ExitStatus;
use crate::catalog::{FileSummary, TranslationReport};
use crate::extract::ExtractionStats;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub output: PathBuf,
    pub stats: ExtractionStats,
    pub files: IndexMap<String, FileSummary>,
    pub total_keys: usize,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub report: TranslationReport,
    pub report_path: PathBuf,
    pub written_count: usize,
    /// Strings left in the source language after a failed call.
    pub fallback_count: usize,
    pub write_failure_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running locsmith commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files or strings that failed and were recovered from.
    pub failure_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.failure_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
