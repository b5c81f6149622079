//! Instruction text sent to the completion endpoint and cleanup of its reply.

/// Human-readable names for the language tags the tool knows about.
pub const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("zh-CN", "Simplified Chinese"),
    ("ja-JP", "Japanese"),
    ("ko-KR", "Korean"),
    ("fr-FR", "French"),
    ("de-DE", "German"),
    ("es-ES", "Spanish"),
];

/// Name used in the instruction; unknown tags pass through unchanged.
pub fn language_name(tag: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| *known == tag)
        .map_or(tag, |(_, name)| name)
}

pub fn build_prompt(text: &str, target_language: &str, app_name: Option<&str>) -> String {
    let context = app_name
        .map(|app| format!(" This is from the {} application interface.", app))
        .unwrap_or_default();

    format!(
        "Please translate the following UI text to {}.{} Keep the original formatting, \
         any HTML tags, and any placeholders like {{variables}}. Only return the translated \
         text without quotes or explanations:\n\n{}",
        language_name(target_language),
        context,
        text
    )
}

/// Drop one leading and one trailing quote character.
pub fn clean_completion(completion: &str) -> String {
    let is_quote = |c: char| c == '"' || c == '\'';
    let text = completion.strip_prefix(is_quote).unwrap_or(completion);
    let text = text.strip_suffix(is_quote).unwrap_or(text);
    text.to_string()
}
