use std::time::Duration;

use crate::config::BASE_LOCALE;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TARGET_LANGUAGES: &[&str] = &["zh-CN", "ja-JP", "ko-KR", "fr-FR", "de-DE", "es-ES"];
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_DELAY_MS: u64 = 1200;

/// Path appended to an endpoint given as a bare base URL.
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Bearer credential. Checked on the first translation call.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub target_languages: Vec<String>,
    /// Strings translated concurrently per chunk.
    pub batch_size: usize,
    /// Pause between chunks.
    pub delay: Duration,
    /// Locale directory name substituted when writing output.
    pub base_locale: String,
    /// Product name mentioned in the translation instruction.
    pub app_name: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            target_languages: DEFAULT_TARGET_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            batch_size: DEFAULT_BATCH_SIZE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            base_locale: BASE_LOCALE.to_string(),
            app_name: None,
        }
    }
}

impl TranslatorConfig {
    /// Chunk size, never zero.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Append the completions path to a bare base URL.
///
/// URLs already containing `/chat/completions` or `/v1/` are kept as given.
pub fn normalize_endpoint(url: &str) -> String {
    let url = url.trim();
    if url.contains("/chat/completions") || url.contains("/v1/") {
        return url.to_string();
    }
    let base = url.strip_suffix('/').unwrap_or(url);
    format!("{}{}", base, COMPLETIONS_PATH)
}

/// Hide the last path segment of an endpoint for log output.
pub fn mask_endpoint(url: &str) -> String {
    match url.rfind('/') {
        Some(idx) => format!("{}/***", &url[..idx]),
        None => url.to_string(),
    }
}

/// Parse a comma-separated language list. Blank entries and repeats are dropped.
pub fn parse_languages(list: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for lang in list.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        if !languages.iter().any(|l| l == lang) {
            languages.push(lang.to_string());
        }
    }
    languages
}
