//! User listing table with pagination controls

use std::fmt::Write;

use crate::domain::flash::Alert;
use crate::infrastructure::services::UserPage;

use super::escape::{escape_attr, js_string};

/// Render the alert script (if any), the user rows and the page buttons
pub fn render_user_table(page: &UserPage, alert: Option<&Alert>) -> String {
    let mut html = String::new();

    if let Some(alert) = alert {
        let _ = writeln!(html, "<script>alert({});</script>", js_string(alert.text()));
    }

    html.push_str("<form method=\"get\" action=\"/edit\">\n<table>\n");

    for row in &page.rows {
        let _ = writeln!(
            html,
            concat!(
                "<tr><td>{id}</td><td>{name}</td><td>{email}</td>",
                "<td><input type=\"submit\" name=\"edit\" value=\"{id}\"></td>",
                "<td><img src=\"{image}\" width=\"50\" height=\"50\" alt=\"\"></td></tr>"
            ),
            id = row.id,
            name = escape_attr(&row.display_name),
            email = escape_attr(&row.email),
            image = escape_attr(&row.image_url),
        );
    }

    html.push_str("</table>\n</form>\n");

    let cursor = &page.cursor;
    html.push_str("<form method=\"get\" action=\"/users\">\n");
    let _ = writeln!(
        html,
        "<input type=\"submit\" class=\"previous\" name=\"current\" value=\"{}\">",
        cursor.previous_target()
    );
    for index in cursor.page_indices() {
        let _ = writeln!(
            html,
            "<input type=\"submit\" class=\"page\" name=\"current\" value=\"{}\">",
            index
        );
    }
    let _ = writeln!(
        html,
        "<input type=\"submit\" class=\"next\" name=\"current\" value=\"{}\">",
        cursor.next_target()
    );
    html.push_str("</form>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::PageCursor;
    use crate::infrastructure::services::UserRow;

    fn page(current: usize, total: usize, rows: Vec<UserRow>) -> UserPage {
        UserPage {
            cursor: PageCursor::new(current, 2, total),
            rows,
        }
    }

    fn row(id: u64, name: &str) -> UserRow {
        UserRow {
            id,
            display_name: name.to_string(),
            email: format!("{}@example.com", name),
            image_url: "/assets/placeholder.svg".to_string(),
        }
    }

    #[test]
    fn test_rows_and_edit_buttons() {
        let html = render_user_table(&page(0, 5, vec![row(1, "alice"), row(2, "bob")]), None);

        assert!(html.contains("<td>alice</td>"));
        assert!(html.contains(r#"name="edit" value="2""#));
        assert!(html.contains(r#"src="/assets/placeholder.svg""#));
        assert!(!html.contains("alert("));
    }

    #[test]
    fn test_pagination_buttons() {
        let html = render_user_table(&page(2, 5, vec![row(5, "eve")]), None);

        assert!(html.contains(r#"class="previous" name="current" value="1""#));
        assert!(html.contains(r#"class="next" name="current" value="2""#));
        assert_eq!(html.matches(r#"class="page""#).count(), 3);
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_user_table(&page(0, 1, vec![row(1, "<b>x</b>")]), None);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_alert_script() {
        let alert = Alert::Error("Sorry, that username already exists!".to_string());
        let html = render_user_table(&page(0, 0, Vec::new()), Some(&alert));

        assert!(html.starts_with(r#"<script>alert("Sorry, that username already exists!");</script>"#));
    }
}
