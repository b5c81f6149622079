//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan a source tree and write the catalog artifact
//! - `translate`: Translate a catalog artifact and write locale files
//! - `init`: Initialize the extractor configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::translate::config::{
    DEFAULT_API_URL, DEFAULT_BATCH_SIZE, DEFAULT_DELAY_MS, DEFAULT_MODEL,
};

/// Default file name of the intermediate catalog artifact.
pub const DEFAULT_ARTIFACT: &str = "translations.json";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source tree to scan
    pub source: PathBuf,

    /// Where to write the catalog artifact
    #[arg(default_value = DEFAULT_ARTIFACT)]
    pub output: PathBuf,

    /// Aggregate catalog for component strings (overrides config file)
    #[arg(long)]
    pub component_catalog: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Catalog artifact produced by `extract`
    pub input: PathBuf,

    /// Source tree receiving the localized catalogs
    pub destination: PathBuf,

    /// Bearer credential for the translation API
    #[arg(long, env = "TRANSLATION_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Completion endpoint or base URL
    #[arg(long, env = "TRANSLATION_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Model identifier sent with every request
    #[arg(long, env = "TRANSLATION_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Comma-separated target language tags
    #[arg(long, env = "TARGET_LANGUAGES")]
    pub languages: Option<String>,

    /// Strings translated concurrently per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between batches, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Application name mentioned in the translation instruction
    #[arg(long)]
    pub app_name: Option<String>,

    /// Locale directory the catalogs were extracted from (default: `baseLocale` from the config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Where to write the translation report (default: next to the input)
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from components and base-locale catalogs
    Extract(ExtractCommand),
    /// Machine-translate an extracted catalog into locale files
    Translate(TranslateCommand),
    /// Initialize a new .locsmithrc.json configuration file
    Init,
}
