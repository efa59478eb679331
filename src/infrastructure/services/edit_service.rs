//! Edit service - partial updates of existing user records

use tracing::{debug, warn};

use crate::domain::flash::FlashMessage;
use crate::domain::sanitize::{sanitize_email, sanitize_text_field};
use crate::domain::user::{UserId, ValidationPolicy};
use crate::infrastructure::user::UserService;

pub const UPDATED: &str = "updated successfully";

/// Raw edit form fields, as received in the query string
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub name: String,
    pub password: String,
    pub email: String,
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct EditService {
    users: UserService,
}

impl EditService {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Apply one edit submission and describe the outcome.
    ///
    /// The password takes part in validation but is never written.
    pub async fn edit(&self, form: EditForm) -> FlashMessage {
        let name = sanitize_text_field(&form.name);
        let password = sanitize_text_field(&form.password);
        let email = sanitize_email(&form.email);
        let id = UserId::parse(&sanitize_text_field(&form.id));

        let mut flash = FlashMessage::new();
        let policy = ValidationPolicy::Edit;

        if let Err(e) = policy.check(&name, &password, &email) {
            debug!(user_id = ?id, error = %e, "Edit rejected");
            flash.set_error(policy.message());
            return flash;
        }

        match self.users.update_profile(id, &name, &email).await {
            Ok(_) => flash.set_success(UPDATED),
            Err(e) => {
                warn!(user_id = ?id, error = %e, "User update failed");
                flash.set_error(format!("Error{}", e.message()));
            }
        }

        flash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::user::NewUser;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository};

    fn users() -> UserService {
        let repository = InMemoryUserRepository::with_users(vec![
            NewUser {
                display_name: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "alice-hash".to_string(),
            },
            NewUser {
                display_name: "bob".to_string(),
                email: "bob@example.com".to_string(),
                password_hash: "bob-hash".to_string(),
            },
        ]);

        UserService::new(Arc::new(repository), Arc::new(Argon2Hasher::new()))
    }

    fn form(name: &str, password: &str, email: &str, id: &str) -> EditForm {
        EditForm {
            name: name.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_inclusive_boundaries_succeed() {
        let users = users();
        let service = EditService::new(users.clone());

        let flash = service.edit(form("ann", "12345", "a@b.c", "1")).await;

        assert_eq!(flash.success(), Some(UPDATED));
        assert!(flash.error().is_none());

        let user = users.get(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(user.display_name(), "ann");
        assert_eq!(user.email(), "a@b.c");
    }

    #[tokio::test]
    async fn test_password_is_never_written() {
        let users = users();
        let service = EditService::new(users.clone());

        service
            .edit(form("alicia", "brand-new-password", "alicia@example.com", "1"))
            .await;

        let user = users.get(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(user.password_hash(), "alice-hash");
    }

    #[tokio::test]
    async fn test_short_fields_set_edit_message() {
        let service = EditService::new(users());

        let flash = service.edit(form("al", "12345", "a@b.c", "1")).await;

        assert_eq!(flash.error(), Some(ValidationPolicy::Edit.message()));
        assert!(flash.success().is_none());
    }

    #[tokio::test]
    async fn test_unknown_id_is_prefixed_error() {
        let service = EditService::new(users());

        let missing = service.edit(form("carol", "12345", "carol@example.com", "9")).await;
        assert_eq!(missing.error(), Some("ErrorInvalid user ID."));
        assert!(missing.success().is_none());

        let garbage = service.edit(form("carol", "12345", "carol@example.com", "abc")).await;
        assert_eq!(garbage.error(), Some("ErrorInvalid user ID."));
    }

    #[tokio::test]
    async fn test_conflicting_email_is_prefixed_error() {
        let service = EditService::new(users());

        let flash = service.edit(form("alice", "12345", "bob@example.com", "1")).await;

        assert_eq!(
            flash.error(),
            Some("ErrorSorry, that email address is already used!")
        );
    }
}
