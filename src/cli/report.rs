//! Summary printing for CLI commands.
//!
//! Kept separate from the command logic so locsmith can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, TranslateSummary,
};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, writer),
        CommandSummary::Translate(summary) => print_translate(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let stats = &summary.stats;

    if summary.files.is_empty() {
        let _ = writeln!(writer, "{}", "No translatable strings found".yellow());
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} from {} {}:",
            "Extracted".green().bold(),
            summary.total_keys,
            plural(summary.total_keys, "key", "keys"),
            summary.files.len(),
            plural(summary.files.len(), "file", "files")
        );
        let width = summary
            .files
            .keys()
            .map(|file| file.width())
            .max()
            .unwrap_or(0);
        for (file, file_summary) in &summary.files {
            let _ = writeln!(
                writer,
                "  {}{}  {} {}",
                file.cyan(),
                " ".repeat(width - file.width()),
                file_summary.key_count,
                plural(file_summary.key_count, "key", "keys")
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} message {} and {} {} ({} component {}) -> {}",
            stats.message_files,
            plural(stats.message_files, "catalog", "catalogs"),
            stats.component_files,
            plural(stats.component_files, "component", "components"),
            stats.component_strings,
            plural(stats.component_strings, "string", "strings"),
            summary.output.display()
        )
        .green()
    );

    if stats.failed_files > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read{}",
            "warning:".bold().yellow(),
            stats.failed_files,
            plural(stats.failed_files, "file", "files"),
            verbose_hint(verbose)
        );
    }
    if stats.overwritten_keys > 0 {
        let _ = writeln!(
            writer,
            "{} {} component {} shared by files with the same name were overwritten{}",
            "warning:".bold().yellow(),
            stats.overwritten_keys,
            plural(stats.overwritten_keys, "key", "keys"),
            verbose_hint(verbose)
        );
    }
    if stats.skipped_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be accessed and {} skipped",
            "warning:".bold().yellow(),
            stats.skipped_paths,
            plural(stats.skipped_paths, "path", "paths"),
            plural(stats.skipped_paths, "was", "were")
        );
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;

    let _ = writeln!(
        writer,
        "{} {} {} from {} {} into {} {}:",
        "Translated".green().bold(),
        report.total_keys,
        plural(report.total_keys, "key", "keys"),
        report.files_processed,
        plural(report.files_processed, "file", "files"),
        report.languages.len(),
        plural(report.languages.len(), "language", "languages")
    );
    let width = report
        .language_stats
        .keys()
        .map(|lang| lang.width())
        .max()
        .unwrap_or(0);
    for (lang, stats) in &report.language_stats {
        let _ = writeln!(
            writer,
            "  {}{}  {} {}, {} {}",
            lang.cyan(),
            " ".repeat(width - lang.width()),
            stats.files_translated,
            plural(stats.files_translated, "file", "files"),
            stats.total_translations,
            plural(stats.total_translations, "translation", "translations")
        );
    }

    let mark = if summary.write_failure_count > 0 {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };
    let _ = writeln!(
        writer,
        "{} Wrote {} locale {}, report: {}",
        mark,
        summary.written_count,
        plural(summary.written_count, "file", "files"),
        summary.report_path.display()
    );

    if summary.fallback_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} kept the source text{}",
            "warning:".bold().yellow(),
            summary.fallback_count,
            plural(summary.fallback_count, "string", "strings"),
            verbose_hint(verbose)
        );
    }
    if summary.write_failure_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} locale {} could not be written",
            "warning:".bold().yellow(),
            summary.write_failure_count,
            plural(summary.write_failure_count, "file", "files")
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Created {}",
        SUCCESS_MARK.green(),
        summary.path.display()
    );
}

fn verbose_hint(verbose: bool) -> String {
    if verbose {
        String::new()
    } else {
        format!(" (use {} for details)", "-v".cyan())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use indexmap::IndexMap;

    use super::*;
    use crate::catalog::{FileSummary, LanguageStats, TranslationReport};
    use crate::extract::ExtractionStats;

    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(result: &CommandResult, verbose: bool) -> String {
        let mut output = Vec::new();
        print_to(result, verbose, &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn file_summary(key_count: usize) -> FileSummary {
        FileSummary {
            key_count,
            sample_keys: Vec::new(),
        }
    }

    #[test]
    fn test_print_extract_aligns_files() {
        let mut files = IndexMap::new();
        files.insert("a/en-US/common.json".to_string(), file_summary(3));
        files.insert("b.json".to_string(), file_summary(1));
        let result = CommandResult {
            summary: CommandSummary::Extract(ExtractSummary {
                output: PathBuf::from("translations.json"),
                stats: ExtractionStats {
                    message_files: 2,
                    component_files: 1,
                    component_strings: 1,
                    ..Default::default()
                },
                files,
                total_keys: 4,
            }),
            failure_count: 0,
        };

        let output = render(&result, false);
        assert!(output.contains("Extracted 4 keys from 2 files:"));
        assert!(output.contains("  a/en-US/common.json  3 keys\n"));
        assert!(output.contains("  b.json               1 key\n"));
        assert!(output.contains(
            "Scanned 2 message catalogs and 1 component (1 component string) -> translations.json"
        ));
        assert!(!output.contains("warning:"));
    }

    #[test]
    fn test_print_extract_failures() {
        let result = CommandResult {
            summary: CommandSummary::Extract(ExtractSummary {
                output: PathBuf::from("out.json"),
                stats: ExtractionStats {
                    failed_files: 2,
                    ..Default::default()
                },
                files: IndexMap::new(),
                total_keys: 0,
            }),
            failure_count: 2,
        };

        let output = render(&result, false);
        assert!(output.contains("No translatable strings found"));
        assert!(output.contains("warning: 2 files could not be read (use -v for details)"));

        let output = render(&result, true);
        assert!(output.contains("warning: 2 files could not be read\n"));
    }

    #[test]
    fn test_print_translate() {
        let mut language_stats = IndexMap::new();
        language_stats.insert(
            "zh-CN".to_string(),
            LanguageStats {
                files_translated: 2,
                total_translations: 5,
            },
        );
        language_stats.insert(
            "ko-KR".to_string(),
            LanguageStats {
                files_translated: 1,
                total_translations: 1,
            },
        );
        let result = CommandResult {
            summary: CommandSummary::Translate(TranslateSummary {
                report: TranslationReport {
                    timestamp: String::new(),
                    languages: vec!["zh-CN".to_string(), "ko-KR".to_string()],
                    total_keys: 5,
                    files_processed: 2,
                    language_stats,
                },
                report_path: PathBuf::from("translation-report.json"),
                written_count: 3,
                fallback_count: 1,
                write_failure_count: 0,
            }),
            failure_count: 1,
        };

        let output = render(&result, false);
        assert!(output.contains("Translated 5 keys from 2 files into 2 languages:"));
        assert!(output.contains("  zh-CN  2 files, 5 translations\n"));
        assert!(output.contains("  ko-KR  1 file, 1 translation\n"));
        assert!(output.contains("✓ Wrote 3 locale files, report: translation-report.json"));
        assert!(output.contains("warning: 1 string kept the source text"));
        assert!(!output.contains("could not be written"));
    }

    #[test]
    fn test_print_init() {
        let result = CommandResult {
            summary: CommandSummary::Init(InitSummary {
                path: PathBuf::from(".locsmithrc.json"),
            }),
            failure_count: 0,
        };
        assert_eq!(render(&result, false), "✓ Created .locsmithrc.json\n");
    }
}
