//! Signup Portal
//!
//! Self-registration with a profile image, a paginated user listing and a
//! user edit form, served as server-rendered HTML pages:
//! - Form actions dispatched by an `action` field
//! - Outcomes carried to the next page as single-use flash messages
//! - Nonce-protected registration submissions

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::{
    flash::MokaFlashStore,
    nonce::{HmacNonceService, NonceService},
    services::{EditService, FrontService, ListingService, RegistrationService},
    upload::{ImageUploader, InMemoryAttachmentRepository, LocalFileStorage},
    user::{Argon2Hasher, InMemoryUserRepository, UserService},
};
use tracing::{info, warn};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.site.page_size == 0 {
        return Err(anyhow::anyhow!("site.page_size must be at least 1"));
    }

    let users = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2Hasher::new()),
    );

    let storage = LocalFileStorage::new(
        &config.uploads.dir,
        &config.uploads.public_base_url,
        config.uploads.max_bytes,
    );
    info!(dir = %storage.root().display(), "Upload storage configured");

    let uploader = ImageUploader::new(
        Arc::new(storage),
        Arc::new(InMemoryAttachmentRepository::new()),
        users.clone(),
    );

    let nonces = create_nonce_service(config);

    let flash_store = MokaFlashStore::new(
        Duration::from_secs(config.flash.ttl_secs),
        config.flash.max_entries,
    );

    Ok(AppState {
        registration_service: Arc::new(RegistrationService::new(
            users.clone(),
            uploader,
            nonces,
        )),
        edit_service: Arc::new(EditService::new(users.clone())),
        listing_service: Arc::new(ListingService::new(
            users,
            config.site.page_size,
            &config.site.placeholder_image_url,
        )),
        front_service: Arc::new(FrontService::new()),
        flash_store: Arc::new(flash_store),
    })
}

fn create_nonce_service(config: &AppConfig) -> Arc<dyn NonceService> {
    match config.nonce.secret.as_deref() {
        Some(secret) if !secret.is_empty() => Arc::new(HmacNonceService::new(
            secret.as_bytes().to_vec(),
            config.nonce.lifetime_secs,
        )),
        _ => {
            warn!("No nonce secret configured, using a random per-process secret");
            Arc::new(HmacNonceService::with_random_secret(
                config.nonce.lifetime_secs,
            ))
        }
    }
}
