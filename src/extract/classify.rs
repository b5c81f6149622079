//! Heuristic that decides whether a literal found in markup is user-facing copy.
//!
//! Three tiers are checked in a fixed order:
//!
//! 1. Exclusions (URLs, class names, identifiers, technical vocabulary, ...)
//! 2. Inclusions (CJK text, multi-word phrases, common UI vocabulary)
//! 3. A default rule for everything else
//!
//! An exclusion always wins over an inclusion, and an inclusion always wins
//! over the default rule.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest and longest candidate, in characters, that can be UI text.
pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 100;

/// Upper bound on words for text accepted by the default rule.
pub const MAX_DEFAULT_WORDS: usize = 10;

/// Framework, markup and API vocabulary that is never translated when it is
/// the whole string. Compared case-insensitively.
pub const TECHNICAL_TERMS: &[&str] = &[
    "true", "false", "null", "undefined", "NaN", "JSON", "API", "URL", "ID", "UUID", "HTML", "CSS",
    "JS", "npm", "pnpm", "yarn", "vue", "ref", "computed", "reactive", "emit", "props", "slots",
    "router", "store", "dev", "prod", "build", "test", "src", "dist", "public", "assets",
    "components", "pages", "views", "utils", "helpers", "plugins", "middleware", "layouts",
    "types", "interfaces", "enums", "constants", "config", "env", "local", "session", "storage",
    "cache", "token", "auth", "login", "logout", "admin", "user", "profile", "settings", "theme",
    "dark", "light", "auto", "modal", "dropdown", "tooltip", "button", "input", "textarea",
    "select", "checkbox", "radio", "switch", "slider", "progress", "loading", "spinner", "icon",
    "image", "avatar", "badge", "chip", "card", "table", "list", "grid", "row", "col", "header",
    "footer", "sidebar", "navbar", "menu", "tab", "accordion", "carousel", "dialog", "alert",
    "snackbar", "notification", "breadcrumb", "pagination", "search", "filter", "sort", "create",
    "read", "update", "delete", "crud", "get", "post", "put", "patch", "fetch", "axios", "http",
    "ws", "socket",
];

/// CSS layout keywords. Compared case-insensitively.
pub const CSS_KEYWORDS: &[&str] = &[
    "flex", "grid", "block", "inline", "absolute", "relative", "fixed", "sticky", "hidden",
    "visible", "auto", "none", "center", "left", "right", "top", "bottom", "start", "end",
    "between", "around", "evenly", "stretch", "baseline", "nowrap", "wrap", "column", "row",
    "reverse",
];

/// Responsive breakpoint prefixes. Case-sensitive.
pub const BREAKPOINT_TOKENS: &[&str] = &["sm", "md", "lg", "xl", "2xl", "xs"];

/// CSS units and similar measurement suffixes. Case-sensitive.
pub const UNIT_TOKENS: &[&str] = &[
    "px", "rem", "em", "vh", "vw", "vmin", "vmax", "deg", "rad", "turn", "s", "ms", "Hz", "kHz",
];

/// Spacing utility prefixes, matched as `<prefix>-<digits>`.
pub const SPACING_PREFIXES: &[&str] = &[
    "mt", "mb", "ml", "mr", "mx", "my", "pt", "pb", "pl", "pr", "px", "py", "m", "p",
];

/// Sizing utility prefixes, matched as `<prefix>-...`.
pub const SIZING_PREFIXES: &[&str] = &["w", "h", "min-w", "min-h", "max-w", "max-h"];

/// Color-scale utility prefixes, matched as `<prefix>-<anything>`.
pub const COLOR_SCALE_PREFIXES: &[&str] = &["bg", "text", "border", "shadow", "ring"];

/// Actions and labels that almost always appear as visible copy.
pub const UI_ACTION_WORDS: &[&str] = &[
    "Add", "Create", "Delete", "Remove", "Save", "Cancel", "OK", "Yes", "No", "Confirm", "Submit",
    "Reset", "Clear", "Close", "Open", "Edit", "Update", "Refresh", "Reload", "Login", "Logout",
    "Sign in", "Sign up", "Register", "Search", "Filter", "Sort", "Upload", "Download", "Import",
    "Export", "Settings", "Options", "Preferences", "Help", "About", "Contact", "Home", "Back",
    "Next", "Previous", "Continue", "Finish", "Done", "Complete", "Error", "Success", "Warning",
    "Info", "Loading", "Please", "Select", "Choose", "Enter", "Input", "Required", "Optional",
    "Invalid", "Valid", "Failed", "Retry", "Try again", "Welcome", "Hello", "Goodbye",
    "Thank you", "Sorry", "Excuse me", "Name", "Email", "Password", "Username", "Phone",
    "Address", "Install", "Installed", "Available", "Version", "Latest", "New", "Old", "Recent",
    "Popular", "Featured", "Recommended", "Trending", "Hot", "Best", "Top", "All", "None", "Any",
    "Some", "Many", "Few", "Several", "First", "Last", "More", "Less", "Show", "Hide", "View",
    "Preview", "Play", "Pause", "Stop", "Start", "Run", "Launch", "Execute", "Copy", "Paste",
    "Cut", "Undo", "Redo", "Move", "Rename", "Duplicate", "Share", "Like", "Favorite",
    "Bookmark", "Subscribe", "Follow", "Unfollow", "Block", "Report", "Flag", "Pin", "Archive",
    "Trash", "Restore",
];

/// Status, state and layout nouns that show up in messages and labels.
pub const UI_STATUS_WORDS: &[&str] = &[
    "loading", "error", "success", "warning", "info", "notice", "alert", "message",
    "notification", "toast", "modal", "dialog", "popup", "tooltip", "hint", "tip", "guide",
    "tutorial", "wizard", "step", "progress", "status", "state", "condition", "result",
    "outcome", "response", "feedback", "comment", "review", "rating", "score", "point", "level",
    "rank", "grade", "category", "type", "kind", "sort", "group", "class", "tag", "label", "mark",
    "flag", "badge", "icon", "symbol", "sign", "indicator", "marker", "pointer", "cursor",
    "arrow", "direction", "position", "location", "place", "area", "region", "zone", "section",
    "part", "piece", "item", "element", "component", "widget", "control", "field", "input",
    "output", "data", "content", "text", "title", "header", "footer", "sidebar", "navbar",
    "menu", "tab", "page", "screen", "view", "panel", "pane", "window", "frame", "border",
    "edge", "corner", "center", "middle", "side", "top", "bottom", "left", "right", "up", "down",
    "in", "out", "over", "under", "above", "below", "before", "after", "front", "back", "inside",
    "outside", "within", "without", "around", "between", "among", "through", "across", "along",
    "beside", "next", "near", "far", "close", "open", "wide", "narrow", "big", "small", "large",
    "tiny", "huge", "mini", "short", "long", "tall", "high", "low", "deep", "shallow", "thick",
    "thin", "heavy", "light", "fast", "slow", "quick", "rapid", "instant", "immediate", "soon",
    "late", "early", "now", "then", "today", "tomorrow", "yesterday", "morning", "afternoon",
    "evening", "night", "day", "week", "month", "year", "hour", "minute", "second", "time",
    "date", "schedule", "calendar", "timer", "clock", "watch", "alarm", "reminder",
];

/// Shape-based exclusions, checked before the vocabularies.
static EXCLUSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // URLs and paths
        r"^https?://",
        r"^[/.]",
        // class-name-like tokens
        r"^[a-z-]+$",
        // a lone tag
        r"^<[^>]+>$",
        // identifiers
        r"^[a-z][a-zA-Z0-9_]*$",
        r"^\d+$",
        // nothing but punctuation and symbols
        r"^[^a-zA-Z0-9\x{4e00}-\x{9fa5}]+$",
        r"^.$",
        // hex colors and versions
        r"(?i)^#[0-9a-f]{3,6}$",
        r"^v?\d+\.\d+",
        // interpolation placeholders
        r"^\{\s*\w+\s*\}$",
        r"^\{\{\s*.*\s*\}\}$",
        r"^\s+$",
    ]
    .iter()
    .map(|pattern| compile(pattern))
    .collect()
});

static UTILITY_CLASS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(&format!(r"^(?:{})-\d+$", alternation(SPACING_PREFIXES))),
        compile(&format!(r"^(?:{})-", alternation(SIZING_PREFIXES))),
        compile(&format!(r"^(?:{})-.+$", alternation(COLOR_SCALE_PREFIXES))),
    ]
});

static CJK_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"[\x{4e00}-\x{9fa5}]"));

static MULTI_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b[A-Za-z]+\s+[A-Za-z]+\b"));

static UI_ACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| word_prefix_pattern(UI_ACTION_WORDS));

static UI_STATUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| word_prefix_pattern(UI_STATUS_WORDS));

static CAMEL_CASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-z]+(?:[A-Z][a-z]*)*$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in classifier pattern must compile")
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|")
}

/// A vocabulary word starting at a word boundary and followed by whitespace
/// or the end of the text.
fn word_prefix_pattern(words: &[&str]) -> Regex {
    compile(&format!(r"(?i)\b(?:{})(?:\s|$)", alternation(words)))
}

/// Returns true if `text` looks like user-facing copy.
///
/// The input is trimmed first. The result depends on the text alone.
pub fn classify(text: &str) -> bool {
    let text = text.trim();
    let len = text.chars().count();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
        return false;
    }

    if is_excluded(text) {
        return false;
    }

    if is_included(text) {
        return true;
    }

    default_accept(text)
}

pub fn is_excluded(text: &str) -> bool {
    EXCLUSION_PATTERNS.iter().any(|p| p.is_match(text))
        || TECHNICAL_TERMS.iter().any(|t| t.eq_ignore_ascii_case(text))
        || CSS_KEYWORDS.iter().any(|t| t.eq_ignore_ascii_case(text))
        || BREAKPOINT_TOKENS.contains(&text)
        || UTILITY_CLASS_PATTERNS.iter().any(|p| p.is_match(text))
        || UNIT_TOKENS.contains(&text)
}

pub fn is_included(text: &str) -> bool {
    CJK_PATTERN.is_match(text)
        || MULTI_WORD_PATTERN.is_match(text)
        || UI_ACTION_PATTERN.is_match(text)
        || UI_STATUS_PATTERN.is_match(text)
}

fn default_accept(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
        && !CAMEL_CASE_PATTERN.is_match(text)
        && text.split_whitespace().count() <= MAX_DEFAULT_WORDS
}
