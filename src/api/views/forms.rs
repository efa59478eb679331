//! Registration and edit forms

use super::escape::escape_attr;
use super::ACTION_ENDPOINT;

/// Multipart registration form posting `action=submit_btn`
pub fn render_register_form(nonce: &str) -> String {
    format!(
        r#"<form method="post" id="register-form" enctype="multipart/form-data" action="{action}">
<input type="hidden" name="action" value="submit_btn">
<input type="hidden" name="login_nonce" value="{nonce}">
<label for="name">UserName</label>
<input name="name" id="name">
<label for="password">Password</label>
<input name="password" id="password">
<label for="email">Email</label>
<input name="email" id="email">
<label for="upload_img">Your image</label>
<input type="file" id="upload_img" name="image">
<input type="submit" name="upload_file" value="Register">
</form>
"#,
        action = ACTION_ENDPOINT,
        nonce = escape_attr(nonce)
    )
}

/// Edit form submitted by GET with `action=edit`; the id field is read-only
pub fn render_edit_form(target_id: u64) -> String {
    format!(
        r#"<form method="get" action="{action}">
<input type="hidden" name="action" value="edit">
<label for="name">new name</label>
<input type="text" name="name" id="name">
<label for="password">new password</label>
<input type="text" name="password" id="password">
<label for="email">new email</label>
<input type="text" name="email" id="email">
<label for="id">current ID</label>
<input type="number" name="id" id="id" value="{id}" readonly>
<input type="submit">
</form>
"#,
        action = ACTION_ENDPOINT,
        id = target_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_fields() {
        let html = render_register_form("abc123");

        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(html.contains(r#"action="/admin-post.php""#));
        assert!(html.contains(r#"name="action" value="submit_btn""#));
        assert!(html.contains(r#"name="login_nonce" value="abc123""#));
        for field in ["name", "password", "email", "image"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "missing {}", field);
        }
    }

    #[test]
    fn test_register_form_escapes_nonce() {
        let html = render_register_form(r#""><script>"#);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_edit_form_prefills_id() {
        let html = render_edit_form(42);

        assert!(html.contains(r#"method="get""#));
        assert!(html.contains(r#"name="action" value="edit""#));
        assert!(html.contains(r#"name="id" id="id" value="42" readonly"#));
    }
}
