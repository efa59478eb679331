//! Page handlers: the register form, the user listing and the edit form

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

use crate::domain::flash::FlashToken;
use crate::domain::pagination::PageCursor;

use super::state::AppState;
use super::types::ApiError;
use super::views::{layout, render_edit_form, render_register_form, render_user_table};

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub current: Option<String>,
    pub flash: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditPageQuery {
    pub edit: Option<String>,
}

/// GET /register
pub async fn register_page(State(state): State<AppState>) -> Html<String> {
    let nonce = state.registration_service.issue_nonce();
    Html(layout("Register", &render_register_form(&nonce)))
}

/// GET /users
pub async fn users_page(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Html<String>, ApiError> {
    let current = PageCursor::parse_index(query.current.as_deref());

    let page = state
        .listing_service
        .page(current)
        .await
        .map_err(ApiError::from)?;

    // Only consume the flash once there is a page to show it on
    let flash = match query.flash {
        Some(token) => state.flash_store.take(&FlashToken::from(token)).await,
        None => None,
    };
    let alert = flash.and_then(|message| message.alert());

    debug!(current = current, alert = alert.is_some(), "Rendering user listing");

    Ok(Html(layout("Users", &render_user_table(&page, alert.as_ref()))))
}

/// GET /edit
pub async fn edit_page(Query(query): Query<EditPageQuery>) -> Html<String> {
    let target_id = query
        .edit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);

    Html(layout("Edit user", &render_edit_form(target_id)))
}
