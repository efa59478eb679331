//! Front service - dry-run check behind the client script's `front_action`

use serde::Serialize;

use crate::domain::sanitize::{sanitize_email, sanitize_text_field};
use crate::domain::user::{validate_email_syntax, ValidationPolicy};

/// Outcome of a dry-run registration check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontCheck {
    pub valid: bool,
    pub message: String,
}

/// Runs the registration checks without touching any store
#[derive(Debug, Clone, Default)]
pub struct FrontService;

impl FrontService {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, name: &str, password: &str, email: &str) -> FrontCheck {
        let name = sanitize_text_field(name);
        let password = sanitize_text_field(password);
        let email = sanitize_email(email);

        let outcome = ValidationPolicy::Registration
            .check(&name, &password, &email)
            .and_then(|_| validate_email_syntax(&email));

        match outcome {
            Ok(()) => FrontCheck {
                valid: true,
                message: "ok".to_string(),
            },
            Err(e) => FrontCheck {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}
