//! Action endpoints dispatched by the `action` form field

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::flash::FlashMessage;
use crate::domain::upload::UploadedFile;
use crate::domain::DomainError;
use crate::infrastructure::services::{EditForm, FrontCheck, RegistrationForm};

use super::state::AppState;
use super::types::{ApiError, ApiErrorType};

/// Plain-text body sent when a form nonce does not verify
pub const NONCE_REJECTED: &str = "dont try to hack me";

const REGISTER_ACTION: &str = "submit_btn";
const EDIT_ACTION: &str = "edit";
const FRONT_ACTION: &str = "front_action";

/// Query string of GET /admin-post.php
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminPostQuery {
    pub action: String,
    pub name: String,
    pub password: String,
    pub email: String,
    pub id: String,
}

/// Query string of GET /admin-ajax.php
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminAjaxQuery {
    pub action: String,
    pub name: String,
    pub password: String,
    pub email: String,
}

/// POST /admin-post.php
/// Multipart registration submission
pub async fn admin_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut action = String::new();
    let mut form = RegistrationForm::default();
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        multipart_error(e.status(), format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(|s| s.to_string());
            let bytes = field.bytes().await.map_err(|e| {
                multipart_error(e.status(), format!("Failed to read file '{}': {}", file_name, e))
            })?;

            let mut file = UploadedFile::new(file_name, bytes);
            if let Some(content_type) = content_type {
                file = file.with_content_type(content_type);
            }
            image = Some(file);
            continue;
        }

        let value = field.text().await.map_err(|e| {
            ApiError::bad_request(format!("Failed to read field '{}': {}", name, e))
        })?;

        match name.as_str() {
            "action" => action = value,
            "name" => form.name = value,
            "password" => form.password = value,
            "email" => form.email = value,
            "login_nonce" => form.login_nonce = Some(value),
            _ => {}
        }
    }

    if action != REGISTER_ACTION {
        return Err(unknown_action(&action));
    }

    debug!(has_image = image.is_some(), "Registration submitted");

    match state.registration_service.register(form, image).await {
        Ok(flash) => Ok(redirect_with_flash(&state, flash).await),
        Err(DomainError::Nonce { action: nonce_action }) => {
            warn!(action = %nonce_action, "Rejected submission with invalid nonce");
            Ok((StatusCode::FORBIDDEN, NONCE_REJECTED).into_response())
        }
        Err(e) => Err(ApiError::from(e)),
    }
}

/// GET /admin-post.php
/// Edit submission carried in the query string
pub async fn admin_post_query(
    State(state): State<AppState>,
    Query(query): Query<AdminPostQuery>,
) -> Result<Response, ApiError> {
    if query.action != EDIT_ACTION {
        return Err(unknown_action(&query.action));
    }

    debug!(id = %query.id, "Edit submitted");

    let flash = state
        .edit_service
        .edit(EditForm {
            name: query.name,
            password: query.password,
            email: query.email,
            id: query.id,
        })
        .await;

    Ok(redirect_with_flash(&state, flash).await)
}

/// GET /admin-ajax.php
/// Dry-run registration check for the client script
pub async fn admin_ajax(
    State(state): State<AppState>,
    Query(query): Query<AdminAjaxQuery>,
) -> Result<Json<FrontCheck>, ApiError> {
    if query.action != FRONT_ACTION {
        return Err(unknown_action(&query.action));
    }

    Ok(Json(state.front_service.check(
        &query.name,
        &query.password,
        &query.email,
    )))
}

async fn redirect_with_flash(state: &AppState, flash: FlashMessage) -> Response {
    let token = state.flash_store.put(flash).await;
    Redirect::to(&format!("/users?flash={}", token)).into_response()
}

/// Requests over the body cap keep their 413; anything else is malformed
fn multipart_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::new(status, ApiErrorType::InvalidRequestError, message)
    } else {
        ApiError::bad_request(message)
    }
}

fn unknown_action(action: &str) -> ApiError {
    ApiError::bad_request(format!("Unknown action '{}'", action)).with_param("action")
}
