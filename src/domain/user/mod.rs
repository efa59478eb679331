//! User domain
//!
//! This module provides domain types and traits for user records,
//! including the user entity, the two form validation policies, and the
//! repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserPatch};
pub use repository::UserRepository;
pub use validation::{validate_email_syntax, UserValidationError, ValidationPolicy};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
