//! Registration service - self-registration with an optional profile image

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::flash::FlashMessage;
use crate::domain::sanitize::{sanitize_email, sanitize_text_field};
use crate::domain::upload::UploadedFile;
use crate::domain::user::{UserId, ValidationPolicy};
use crate::domain::DomainError;
use crate::infrastructure::nonce::NonceService;
use crate::infrastructure::upload::ImageUploader;
use crate::infrastructure::user::{CreateUserRequest, UserService};

/// Nonce action the registration form is bound to
pub const LOGIN_NONCE_ACTION: &str = "login_nonce";

/// Raw registration form fields, before sanitization
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub password: String,
    pub email: String,
    pub login_nonce: Option<String>,
}

/// Registration service: validates, creates the user and attaches the image
#[derive(Debug, Clone)]
pub struct RegistrationService {
    users: UserService,
    uploader: ImageUploader,
    nonces: Arc<dyn NonceService>,
}

impl RegistrationService {
    pub fn new(users: UserService, uploader: ImageUploader, nonces: Arc<dyn NonceService>) -> Self {
        Self {
            users,
            uploader,
            nonces,
        }
    }

    /// Issue a nonce for a freshly rendered registration form
    pub fn issue_nonce(&self) -> String {
        self.nonces.create(LOGIN_NONCE_ACTION)
    }

    /// Process one registration submission.
    ///
    /// Only a rejected nonce is an `Err`; every other outcome is reported
    /// through the returned flash message.
    pub async fn register(
        &self,
        form: RegistrationForm,
        image: Option<UploadedFile>,
    ) -> Result<FlashMessage, DomainError> {
        if let Some(token) = form.login_nonce.as_deref() {
            if !self.nonces.verify(token, LOGIN_NONCE_ACTION) {
                warn!("Registration nonce rejected");
                return Err(DomainError::nonce(LOGIN_NONCE_ACTION));
            }
        }

        let name = sanitize_text_field(&form.name);
        let password = sanitize_text_field(&form.password);
        let email = sanitize_email(&form.email);

        let mut flash = FlashMessage::new();
        let user_id = self.create_user(name, password, email, &mut flash).await;

        self.uploader
            .attach(user_id, image.as_ref(), &mut flash)
            .await;

        Ok(flash)
    }

    async fn create_user(
        &self,
        name: String,
        password: String,
        email: String,
        flash: &mut FlashMessage,
    ) -> Option<UserId> {
        let policy = ValidationPolicy::Registration;

        if let Err(e) = policy.check(&name, &password, &email) {
            debug!(name_len = name.len(), email_len = email.len(), error = %e, "Registration rejected");
            flash.set_error(policy.message());
            return None;
        }

        let request = CreateUserRequest {
            display_name: name,
            email,
            password,
        };

        match self.users.create(request).await {
            Ok(user) => {
                info!(user_id = %user.id(), "User registered");
                flash.set_success(format!(
                    "'{}' - this user was registered, ",
                    user.display_name()
                ));
                Some(user.id())
            }
            Err(e) => {
                warn!(error = %e, "User creation failed");
                flash.set_error(e.message());
                None
            }
        }
    }
}
