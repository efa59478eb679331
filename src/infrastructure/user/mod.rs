//! User infrastructure module
//!
//! This module provides implementations for user management, including
//! password hashing with Argon2, the in-memory repository, and the user
//! service used by the form workflows.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
