use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsmithrc.json";

pub const BASE_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", from = "RawConfig")]
pub struct Config {
    pub base_locale: String,
    pub message_includes: Vec<String>,
    pub component_includes: Vec<String>,
    pub component_catalog: String,
    pub ignores: Vec<String>,
}

/// On-disk shape. Locale-dependent fields left out of the file are derived
/// from `baseLocale`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default = "default_base_locale")]
    base_locale: String,
    message_includes: Option<Vec<String>>,
    #[serde(default = "default_component_includes")]
    component_includes: Vec<String>,
    component_catalog: Option<String>,
    #[serde(default = "default_ignores")]
    ignores: Vec<String>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            message_includes: raw
                .message_includes
                .unwrap_or_else(|| default_message_includes(&raw.base_locale)),
            component_catalog: raw
                .component_catalog
                .unwrap_or_else(|| default_component_catalog(&raw.base_locale)),
            base_locale: raw.base_locale,
            component_includes: raw.component_includes,
            ignores: raw.ignores,
        }
    }
}

fn default_base_locale() -> String {
    BASE_LOCALE.to_string()
}

fn default_message_includes(base_locale: &str) -> Vec<String> {
    vec![format!("**/locales/{}/*.json", base_locale)]
}

fn default_component_includes() -> Vec<String> {
    vec!["**/components/**/*.vue".to_string()]
}

fn default_component_catalog(base_locale: &str) -> String {
    format!("src/locales/{}/components.json", base_locale)
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_locale: default_base_locale(),
            message_includes: default_message_includes(BASE_LOCALE),
            component_includes: default_component_includes(),
            component_catalog: default_component_catalog(BASE_LOCALE),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every include and ignore entry must be a valid glob, and the component
    /// catalog must sit under the base-locale directory so it can be mapped
    /// to the other locales.
    pub fn validate(&self) -> Result<()> {
        for (field, patterns) in [
            ("messageIncludes", &self.message_includes),
            ("componentIncludes", &self.component_includes),
            ("ignores", &self.ignores),
        ] {
            for pattern in patterns {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }

        let segment = format!("/{}/", self.base_locale);
        if !format!("/{}", self.component_catalog).contains(&segment) {
            anyhow::bail!(
                "'componentCatalog' must contain a '{}' directory segment: \"{}\"",
                self.base_locale,
                self.component_catalog
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
