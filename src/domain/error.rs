use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Nonce verification failed for action '{action}'")]
    Nonce { action: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn nonce(action: impl Into<String>) -> Self {
        Self::Nonce {
            action: action.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The bare message, without the kind prefix used by `Display`.
    ///
    /// Flash messages show this text to the user.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message }
            | Self::Validation { message }
            | Self::Conflict { message }
            | Self::Storage { message }
            | Self::Internal { message } => message.clone(),
            Self::Nonce { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Invalid user ID.");
        assert_eq!(error.to_string(), "Not found: Invalid user ID.");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Sorry, that username already exists!");
        assert_eq!(
            error.to_string(),
            "Conflict: Sorry, that username already exists!"
        );
    }

    #[test]
    fn test_nonce_error() {
        let error = DomainError::nonce("login_nonce");
        assert_eq!(
            error.to_string(),
            "Nonce verification failed for action 'login_nonce'"
        );
    }

    #[test]
    fn test_message_strips_kind_prefix() {
        let error = DomainError::storage("disk full");
        assert_eq!(error.message(), "disk full");
    }
}
