//! Server-side rendering of the register, listing and edit pages
//!
//! Everything here is a pure function from values to HTML strings.

mod escape;
mod forms;
mod layout;
mod table;

pub use escape::{escape_attr, js_string};
pub use forms::{render_edit_form, render_register_form};
pub use layout::layout;
pub use table::render_user_table;

/// Endpoint every form action is submitted to
pub const ACTION_ENDPOINT: &str = "/admin-post.php";
