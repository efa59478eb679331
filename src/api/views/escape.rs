//! Output escaping for server-rendered HTML

use std::borrow::Cow;

/// Escape text for an HTML attribute value or element body
pub fn escape_attr(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 16);

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }

    Cow::Owned(escaped)
}

/// Quote text as a JavaScript string literal safe to embed in a `<script>`
pub fn js_string(raw: &str) -> String {
    let quoted = serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string());
    quoted.replace("</", "<\\/")
}
