use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::catalog::{ExtractionReport, write_json_pretty};
use crate::cli::args::ExtractCommand;
use crate::config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config};
use crate::error::Error;
use crate::extract::Extractor;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    if !cmd.source.exists() {
        return Err(Error::SourceNotFound(cmd.source).into());
    }

    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&cmd.source)?;
    if !from_file {
        tracing::debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
    }
    if let Some(component_catalog) = cmd.component_catalog {
        config.component_catalog = component_catalog;
        config.validate()?;
    }

    tracing::info!("scanning {}", cmd.source.display());
    let extraction = Extractor::new(config).scan(&cmd.source)?;
    let stats = extraction.stats;

    let report = ExtractionReport::new(&cmd.source, extraction.catalog);
    write_json_pretty(&cmd.output, &report)
        .with_context(|| format!("Failed to write catalog artifact: {}", cmd.output.display()))?;

    Ok(CommandResult {
        failure_count: stats.failed_files,
        summary: CommandSummary::Extract(ExtractSummary {
            output: cmd.output,
            stats,
            files: report.summary,
            total_keys: report.total_keys,
        }),
    })
}
