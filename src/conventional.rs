use regex::Regex;
use std::sync::LazyLock;

/// `type(scope)!: subject` on the first line of a message
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(?:\(([^)]+)\))?(!)?:\s*(.*)$").expect("Invalid regex")
});

/// `BREAKING CHANGE: ...` or `BREAKING-CHANGE: ...` footer line in a message body
static BREAKING_FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^BREAKING[- ]CHANGE:\s*(.+)$").expect("Invalid regex")
});

/// Type assigned to messages without a conventional prefix
pub const DEFAULT_TYPE: &str = "other";

/// Classification of a single commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalMessage {
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub body: String,
    pub is_breaking_change: bool,
    pub breaking_message: Option<String>,
}

/// First line of a message, trimmed
pub fn first_line(message: &str) -> &str {
    let message = message.trim();
    match message.find('\n') {
        Some(idx) => message[..idx].trim(),
        None => message,
    }
}

/// Parse a commit message according to the conventional commits format.
///
/// Supports:
/// - type(scope)!: subject
/// - type(scope): subject
/// - type!: subject
/// - type: subject
/// - non-conventional text, classified as [`DEFAULT_TYPE`]
///
/// A `BREAKING CHANGE:` / `BREAKING-CHANGE:` footer marks the message as
/// breaking regardless of the header.
pub fn parse_conventional_commit(message: &str) -> ConventionalMessage {
    let subject_line = first_line(message);

    let mut parsed = ConventionalMessage {
        r#type: DEFAULT_TYPE.to_string(),
        scope: None,
        subject: subject_line.to_string(),
        body: String::new(),
        is_breaking_change: false,
        breaking_message: None,
    };

    if let Some(captures) = HEADER_REGEX.captures(subject_line) {
        if let Some(type_match) = captures.get(1) {
            parsed.r#type = type_match.as_str().to_string();
        }
        parsed.scope = captures.get(2).map(|m| m.as_str().to_string());
        parsed.is_breaking_change = captures.get(3).is_some();
        if let Some(subject_match) = captures.get(4) {
            parsed.subject = subject_match.as_str().trim().to_string();
        }
    }

    if let Some((_, rest)) = message.split_once('\n') {
        parsed.body = rest.trim().to_string();

        if let Some(footer) = BREAKING_FOOTER_REGEX
            .captures(&parsed.body)
            .and_then(|captures| captures.get(1))
        {
            parsed.is_breaking_change = true;
            parsed.breaking_message = Some(footer.as_str().trim().to_string());
        }
    }

    parsed
}

/// Whether a commit is excluded by the configured ignore substring.
///
/// An empty pattern never matches.
pub fn should_ignore_commit(message: &str, ignore_pattern: &str) -> bool {
    !ignore_pattern.is_empty() && message.contains(ignore_pattern)
}
