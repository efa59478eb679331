use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;

use crate::config::UploadConfig;

use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::{actions, assets, health, pages};

/// Room for the non-file multipart fields and part headers
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, uploads: &UploadConfig) -> Router {
    let router = Router::new()
        // Pages
        .route("/", get(|| async { Redirect::to("/register") }))
        .route("/register", get(pages::register_page))
        .route("/users", get(pages::users_page))
        .route("/edit", get(pages::edit_page))
        // Form actions
        .route(
            "/admin-post.php",
            get(actions::admin_post_query).post(actions::admin_post),
        )
        .route("/admin-ajax.php", get(actions::admin_ajax))
        // Assets
        .route("/assets/public.js", get(assets::public_js))
        .route("/assets/placeholder.svg", get(assets::placeholder_svg))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check));

    let router = match uploads_mount(&uploads.public_base_url) {
        Some(mount) => router.nest_service(mount, ServeDir::new(&uploads.dir)),
        None => {
            warn!(
                public_base_url = %uploads.public_base_url,
                "Upload URL is not a local path, uploads will not be served"
            );
            router
        }
    };

    router
        .layer(DefaultBodyLimit::max(request_body_limit(uploads)))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Oversized images must reach the storage check, so the cap always leaves
/// room for a full image plus the other form fields
fn request_body_limit(uploads: &UploadConfig) -> usize {
    uploads
        .max_request_bytes
        .max(uploads.max_bytes.saturating_add(MULTIPART_OVERHEAD))
}

/// Path to serve stored uploads from, when they are served locally
fn uploads_mount(public_base_url: &str) -> Option<&str> {
    let mount = public_base_url.trim_end_matches('/');

    (mount.starts_with('/') && mount.len() > 1 && !mount.contains("//")).then_some(mount)
}
