use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::catalog::{TranslationReport, read_catalog_artifact, write_json_pretty};
use crate::cli::args::TranslateCommand;
use crate::config::load_config;
use crate::error::Error;
use crate::translate::{
    HttpCompletionClient, Translator, TranslatorConfig,
    config::{normalize_endpoint, parse_languages},
};

const REPORT_FILE_NAME: &str = "translation-report.json";

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let catalog = read_catalog_artifact(&cmd.input)?;
    if !cmd.destination.exists() {
        return Err(Error::SourceNotFound(cmd.destination).into());
    }
    tracing::info!("found {} files with translations", catalog.len());

    let base_locale = match cmd.base_locale.clone() {
        Some(base_locale) => base_locale,
        None => load_config(&cmd.destination)?.config.base_locale,
    };
    let config = translator_config(&cmd, base_locale)?;
    let client = HttpCompletionClient::new(config.api_url.clone(), config.model.clone())
        .context("Failed to create HTTP client")?;
    let translator = Translator::new(client, config);

    let results = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(translator.translate_all(&catalog))?;

    let outcome = translator.apply_translations(&results, &cmd.destination);

    let report = TranslationReport::new(&results, &catalog);
    let report_path = cmd
        .report
        .unwrap_or_else(|| default_report_path(&cmd.input));
    write_json_pretty(&report_path, &report)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    let fallback_count = translator.fallback_count();
    Ok(CommandResult {
        failure_count: fallback_count + outcome.failed,
        summary: CommandSummary::Translate(TranslateSummary {
            report,
            report_path,
            written_count: outcome.written.len(),
            fallback_count,
            write_failure_count: outcome.failed,
        }),
    })
}

fn translator_config(cmd: &TranslateCommand, base_locale: String) -> Result<TranslatorConfig> {
    let defaults = TranslatorConfig::default();
    let target_languages = match cmd.languages.as_deref() {
        Some(list) => parse_languages(list),
        None => defaults.target_languages,
    };
    if target_languages.is_empty() {
        bail!("No target languages given");
    }

    Ok(TranslatorConfig {
        api_key: cmd.api_key.clone(),
        api_url: normalize_endpoint(&cmd.api_url),
        model: cmd.model.clone(),
        target_languages,
        batch_size: cmd.batch_size,
        delay: Duration::from_millis(cmd.delay_ms),
        base_locale,
        app_name: cmd.app_name.clone(),
    })
}

fn default_report_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(REPORT_FILE_NAME)
}
