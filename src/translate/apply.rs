use std::path::{Component, Path, PathBuf};

use crate::catalog::{LocalizedResults, to_message_catalog, write_json_pretty};

/// Files written and failures seen while applying translations.
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Map a base-locale catalog path to the same path under `target`.
///
/// The last directory segment equal to `base_locale` is replaced. A path
/// without such a segment gets a `target` directory inserted before the
/// file name, so the base catalog is never overwritten.
pub fn localized_path(relative: &str, base_locale: &str, target: &str) -> String {
    let mut segments: Vec<&str> = relative.split('/').collect();
    let file_index = segments.len() - 1;
    match segments[..file_index]
        .iter()
        .rposition(|segment| *segment == base_locale)
    {
        Some(locale_index) => segments[locale_index] = target,
        None => segments.insert(file_index, target),
    }
    segments.join("/")
}

/// True when `relative` stays below the directory it is joined onto.
fn is_contained(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Write every `(language, file, entries)` triple as a message catalog.
///
/// Existing files are overwritten. A failing destination is logged and
/// skipped; the remaining files are still written.
pub fn apply_translations(
    results: &LocalizedResults,
    destination_root: &Path,
    base_locale: &str,
) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for (language, catalog) in results {
        tracing::info!(language = %language, files = catalog.len(), "applying translations");

        for (file, entries) in catalog {
            if !is_contained(file) {
                tracing::warn!(file = %file, language = %language, "catalog path escapes the destination root, skipping");
                outcome.failed += 1;
                continue;
            }
            let relative = localized_path(file, base_locale, language);
            let target = destination_root.join(&relative);
            match write_json_pretty(&target, &to_message_catalog(entries)) {
                Ok(()) => {
                    tracing::info!(file = %relative, keys = entries.len(), "written");
                    outcome.written.push(target);
                }
                Err(e) => {
                    tracing::warn!(file = %relative, language = %language, error = %e, "failed to write catalog");
                    outcome.failed += 1;
                }
            }
        }
    }

    outcome
}
