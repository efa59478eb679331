//! Application state for shared services

use std::sync::Arc;

use crate::domain::flash::{FlashMessage, FlashStore};
use crate::domain::upload::UploadedFile;
use crate::domain::DomainError;
use crate::infrastructure::services::{
    EditForm, EditService, FrontCheck, FrontService, ListingService, RegistrationForm,
    RegistrationService, UserPage,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationServiceTrait>,
    pub edit_service: Arc<dyn EditServiceTrait>,
    pub listing_service: Arc<dyn ListingServiceTrait>,
    pub front_service: Arc<dyn FrontServiceTrait>,
    pub flash_store: Arc<dyn FlashStore>,
}

/// Trait for registration service operations
#[async_trait::async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    fn issue_nonce(&self) -> String;
    async fn register(
        &self,
        form: RegistrationForm,
        image: Option<UploadedFile>,
    ) -> Result<FlashMessage, DomainError>;
}

/// Trait for edit service operations
#[async_trait::async_trait]
pub trait EditServiceTrait: Send + Sync {
    async fn edit(&self, form: EditForm) -> FlashMessage;
}

/// Trait for listing service operations
#[async_trait::async_trait]
pub trait ListingServiceTrait: Send + Sync {
    async fn page(&self, current: usize) -> Result<UserPage, DomainError>;
}

/// Trait for the client script's dry-run check
pub trait FrontServiceTrait: Send + Sync {
    fn check(&self, name: &str, password: &str, email: &str) -> FrontCheck;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl RegistrationServiceTrait for RegistrationService {
    fn issue_nonce(&self) -> String {
        RegistrationService::issue_nonce(self)
    }

    async fn register(
        &self,
        form: RegistrationForm,
        image: Option<UploadedFile>,
    ) -> Result<FlashMessage, DomainError> {
        RegistrationService::register(self, form, image).await
    }
}

#[async_trait::async_trait]
impl EditServiceTrait for EditService {
    async fn edit(&self, form: EditForm) -> FlashMessage {
        EditService::edit(self, form).await
    }
}

#[async_trait::async_trait]
impl ListingServiceTrait for ListingService {
    async fn page(&self, current: usize) -> Result<UserPage, DomainError> {
        ListingService::page(self, current).await
    }
}

impl FrontServiceTrait for FrontService {
    fn check(&self, name: &str, password: &str, email: &str) -> FrontCheck {
        FrontService::check(self, name, password, email)
    }
}
