//! User validation utilities
//!
//! Registration and editing use different length boundaries. They are kept as
//! two named policies so neither silently absorbs the other.

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("{0}")]
    FieldLengths(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

const REGISTRATION_MESSAGE: &str = "name should be more than 3 symbol, password 5, email 5";
const EDIT_MESSAGE: &str = "name should be more than 3 symbol , surname 5, email 5";

const MIN_NAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 5;
const MIN_EMAIL_LENGTH: usize = 5;

/// Field length policy applied to already-sanitized form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Self-registration: every length must strictly exceed its minimum
    Registration,
    /// Record editing: every length may equal its minimum
    Edit,
}

impl ValidationPolicy {
    /// Check name, password and email lengths (in bytes)
    pub fn check(
        &self,
        name: &str,
        password: &str,
        email: &str,
    ) -> Result<(), UserValidationError> {
        let fits = |value: &str, min: usize| match self {
            Self::Registration => value.len() > min,
            Self::Edit => value.len() >= min,
        };

        if fits(name, MIN_NAME_LENGTH)
            && fits(password, MIN_PASSWORD_LENGTH)
            && fits(email, MIN_EMAIL_LENGTH)
        {
            Ok(())
        } else {
            Err(UserValidationError::FieldLengths(self.message()))
        }
    }

    /// The message shown to the user when `check` fails
    pub fn message(&self) -> &'static str {
        match self {
            Self::Registration => REGISTRATION_MESSAGE,
            Self::Edit => EDIT_MESSAGE,
        }
    }
}

/// Validate email syntax before it reaches the user store
pub fn validate_email_syntax(email: &str) -> Result<(), UserValidationError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail(email.to_string()))
    }
}
