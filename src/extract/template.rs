//! Literal text search inside Vue single-file component templates.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

use super::classify::classify;
use crate::catalog::FileEntries;

/// A capture pattern for candidate text. Group 1 holds the candidate.
struct TextPattern {
    regex: Regex,
    /// Reject a match whose preceding character is a word character or `/`.
    /// Keeps quoted attribute values from being confused with the tail of
    /// an identifier or a path.
    detached: bool,
}

impl TextPattern {
    fn new(pattern: &str, detached: bool) -> Self {
        Self {
            regex: Regex::new(pattern).expect("built-in template pattern must compile"),
            detached,
        }
    }
}

static TEMPLATE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<template[^>]*>").expect("built-in template pattern must compile")
});

static TEMPLATE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</template>").expect("built-in template pattern must compile")
});

static TEXT_PATTERNS: LazyLock<Vec<TextPattern>> = LazyLock::new(|| {
    vec![
        // string literals
        TextPattern::new(r#""([^"]{2,50})""#, true),
        TextPattern::new(r"'([^']{2,50})'", true),
        // text between tags
        TextPattern::new(r">([A-Za-z][^<>{}]{2,50}[A-Za-z])<", false),
        // human-facing attributes
        TextPattern::new(r#"placeholder=['"]([^'"]{2,50})['"]"#, false),
        TextPattern::new(r#"title=['"]([^'"]{2,50})['"]"#, false),
        TextPattern::new(r#"alt=['"]([^'"]{2,50})['"]"#, false),
        TextPattern::new(r#"v-tooltip=['"]([^'"]{2,50})['"]"#, false),
        // label and button bodies
        TextPattern::new(r"<label[^>]*>([^<]{2,50})<", false),
        TextPattern::new(r"<[Bb]utton[^>]*>([^<]{2,50})<", false),
    ]
});

/// Extract translatable literals from a component file.
///
/// Keys are `<stem>.text<N>` with `N` counting from 1 in source order across
/// every pattern. A span captured by more than one pattern is counted once,
/// so an attribute value that is also a quoted literal yields a single key
/// rather than one key per pattern.
/// Files without a template yield no entries.
pub fn extract_from_template(content: &str, file_name: &str) -> FileEntries {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let mut entries = FileEntries::new();
    let Some(template) = template_body(content) else {
        tracing::debug!(file = file_name, "no <template> block found");
        return entries;
    };

    let mut spans = candidate_spans(template);
    spans.sort_unstable();
    spans.dedup();

    let mut counter = 1;
    for (start, end) in spans {
        let text = &template[start..end];
        if classify(text) {
            entries.insert(format!("{}.text{}", stem, counter), text.to_string());
            counter += 1;
        }
    }

    entries
}

/// Everything between the first `<template ...>` and the last `</template>`.
fn template_body(content: &str) -> Option<&str> {
    let open = TEMPLATE_OPEN.find(content)?;
    let close = TEMPLATE_CLOSE
        .find_iter(&content[open.end()..])
        .last()?;
    Some(&content[open.end()..open.end() + close.start()])
}

/// Byte spans of trimmed candidates from every pattern, in pattern order.
fn candidate_spans(template: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();

    for pattern in TEXT_PATTERNS.iter() {
        let mut pos = 0;
        while let Some(caps) = pattern.regex.captures_at(template, pos) {
            let (Some(whole), Some(group)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            if pattern.detached && follows_word_or_slash(template, whole.start()) {
                // retry one character further, like a lookbehind would
                pos = whole.start() + next_char_len(template, whole.start());
                continue;
            }

            if let Some(span) = trimmed_span(template, group.start(), group.end()) {
                spans.push(span);
            }
            pos = whole.end();
        }
    }

    spans
}

fn follows_word_or_slash(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/')
}

fn next_char_len(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}

fn trimmed_span(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let s = start + leading;
    Some((s, s + trimmed.len()))
}
