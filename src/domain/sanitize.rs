//! Form input sanitization
//!
//! Every value read from a request goes through one of these functions before
//! it is validated or stored.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>").expect("valid regex")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*(>|$)").expect("valid regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));

static OCTET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("valid regex"));

static FILE_NAME_FORBIDDEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex"));

const EMAIL_LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

/// Placeholder used when a file name sanitizes down to nothing
pub const UNNAMED_FILE: &str = "unnamed-file";

/// Strip markup, percent-encoded octets and redundant whitespace from a
/// single-line text input
pub fn sanitize_text_field(raw: &str) -> String {
    let without_scripts = SCRIPT_OR_STYLE.replace_all(raw, "");
    let without_tags = TAG.replace_all(&without_scripts, "");
    let mut filtered = WHITESPACE_RUN.replace_all(&without_tags, " ").into_owned();

    while OCTET.is_match(&filtered) {
        filtered = OCTET.replace_all(&filtered, "").into_owned();
    }

    WHITESPACE_RUN
        .replace_all(&filtered, " ")
        .trim()
        .to_string()
}

/// Reduce an email address to its allowed characters.
///
/// Returns an empty string when nothing address-shaped remains.
pub fn sanitize_email(raw: &str) -> String {
    let email = raw.trim();

    if email.len() < 3 {
        return String::new();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return String::new();
    };

    let local: String = local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(*c))
        .collect();

    if local.is_empty() {
        return String::new();
    }

    let labels: Vec<String> = domain
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .split('.')
        .map(|label| {
            label
                .trim_matches(|c: char| c.is_whitespace() || c == '-')
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|label| !label.is_empty())
        .collect();

    if labels.len() < 2 {
        return String::new();
    }

    format!("{}@{}", local, labels.join("."))
}

/// Reduce an uploaded file name to a safe, path-free name
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let dashed = WHITESPACE_RUN.replace_all(base.trim(), "-");
    let cleaned = FILE_NAME_FORBIDDEN.replace_all(&dashed, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '-' || c == '_');

    if trimmed.is_empty() {
        UNNAMED_FILE.to_string()
    } else {
        trimmed.to_string()
    }
}
