//! Page shell wrapped around every rendered form

use super::escape::escape_attr;

/// Wrap `body` in a complete HTML document
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="/assets/public.js" defer></script>
</head>
<body>
<nav><a href="/register">Register</a> | <a href="/users">Users</a></nav>
{body}
</body>
</html>
"#,
        title = escape_attr(title),
        body = body
    )
}
