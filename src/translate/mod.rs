//! Translation phase: [`TranslationCatalog`] -> [`LocalizedResults`] -> files.
//!
//! Strings are sent in fixed-size chunks. Every call in a chunk runs
//! concurrently and the chunk completes once all of them have settled; the
//! next chunk starts after a fixed delay. Languages and files are processed
//! one after another.
//!
//! A failed call never aborts the run: the source text is kept and the
//! failure is logged and counted.
//!
//! ## Module Structure
//!
//! - `apply`: writing localized catalogs into the locale directory layout
//! - `client`: completion capability trait and its HTTP implementation
//! - `config`: translator settings
//! - `prompt`: instruction template and reply cleanup

pub mod apply;
pub mod client;
pub mod config;
pub mod prompt;

use std::{
    path::Path,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use futures_util::future::join_all;

pub use apply::{ApplyOutcome, apply_translations, localized_path};
pub use client::{CompletionClient, HttpCompletionClient, ServiceError};
pub use config::TranslatorConfig;

use crate::catalog::{FileEntries, LocalizedResults, TranslationCatalog};
use crate::error::{Error, Result};
use crate::utils::truncate_chars;

/// Characters of source text kept in failure logs.
const LOG_TEXT_CHARS: usize = 50;

pub struct Translator<C> {
    client: C,
    config: TranslatorConfig,
    /// Set once the endpoint and model have been logged for this run.
    config_logged: AtomicBool,
    fallback_count: AtomicUsize,
}

impl<C: CompletionClient> Translator<C> {
    pub fn new(client: C, config: TranslatorConfig) -> Self {
        Self {
            client,
            config,
            config_logged: AtomicBool::new(false),
            fallback_count: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Number of strings that kept their source text because translation failed.
    pub fn fallback_count(&self) -> usize {
        self.fallback_count.load(Ordering::Relaxed)
    }

    /// Translate one string.
    ///
    /// Only a missing credential is an error. Any service failure is logged
    /// and the source text is returned unchanged.
    pub async fn translate_one(&self, text: &str, target_language: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingCredential)?;

        if !self.config_logged.swap(true, Ordering::Relaxed) {
            tracing::info!(
                endpoint = %config::mask_endpoint(&self.config.api_url),
                model = %self.config.model,
                "translation API configured"
            );
        }

        let prompt = prompt::build_prompt(text, target_language, self.config.app_name.as_deref());
        match self.client.complete(api_key, &prompt).await {
            Ok(completion) => {
                let translated = prompt::clean_completion(&completion);
                tracing::debug!(
                    language = target_language,
                    source = %truncate_chars(text, LOG_TEXT_CHARS),
                    translated = %truncate_chars(&translated, LOG_TEXT_CHARS),
                    "translated"
                );
                Ok(translated)
            }
            Err(e) => {
                self.fallback_count.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    language = target_language,
                    text = %truncate_chars(text, LOG_TEXT_CHARS),
                    error = %e,
                    "translation failed, keeping source text"
                );
                Ok(text.to_string())
            }
        }
    }

    /// Translate `texts` in chunks, preserving order and length.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>> {
        let batch_size = self.config.effective_batch_size();
        let total_batches = texts.len().div_ceil(batch_size);
        let mut results = Vec::with_capacity(texts.len());

        for (index, chunk) in texts.chunks(batch_size).enumerate() {
            tracing::info!(
                language = target_language,
                "batch {}/{} ({} items)",
                index + 1,
                total_batches,
                chunk.len()
            );

            let settled = join_all(
                chunk
                    .iter()
                    .map(|text| self.translate_one(text, target_language)),
            )
            .await;
            for translated in settled {
                results.push(translated?);
            }

            if index + 1 < total_batches {
                tracing::debug!("waiting {}ms before next batch", self.config.delay.as_millis());
                tokio::time::sleep(self.config.delay).await;
            }
        }

        Ok(results)
    }

    /// Translate every file of `catalog` into every configured language.
    ///
    /// Files without entries are skipped. Key order is preserved.
    pub async fn translate_all(&self, catalog: &TranslationCatalog) -> Result<LocalizedResults> {
        let mut results = LocalizedResults::new();
        tracing::info!(
            "translating to {} languages",
            self.config.target_languages.len()
        );

        for language in &self.config.target_languages {
            tracing::info!(language = %language, "translating");
            let localized = results.entry(language.clone()).or_default();

            for (file, entries) in catalog {
                if entries.is_empty() {
                    tracing::warn!(file = %file, "no texts to translate");
                    continue;
                }

                let (keys, texts): (Vec<&String>, Vec<String>) = entries
                    .iter()
                    .map(|(key, text)| (key, text.clone()))
                    .unzip();

                let translated = self.translate_batch(&texts, language).await?;
                let translated: FileEntries = keys.into_iter().cloned().zip(translated).collect();
                tracing::info!(file = %file, language = %language, entries = translated.len(), "completed");
                localized.insert(file.clone(), translated);
            }
        }

        Ok(results)
    }

    /// Write `results` under `destination_root`, mapping the base-locale
    /// directory to each language.
    pub fn apply_translations(
        &self,
        results: &LocalizedResults,
        destination_root: &Path,
    ) -> ApplyOutcome {
        apply_translations(results, destination_root, &self.config.base_locale)
    }
}
