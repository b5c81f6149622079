//! Common utility functions shared across the codebase.

/// Shortens text for log lines, cutting on a character boundary.
///
/// Appends `...` when anything was cut.
///
/// # Examples
///
/// ```
/// use locsmith::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Hello", 10), "Hello");
/// assert_eq!(truncate_chars("Hello world", 5), "Hello...");
/// assert_eq!(truncate_chars("正在加载中", 2), "正在...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Plural-aware noun for console summaries.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
