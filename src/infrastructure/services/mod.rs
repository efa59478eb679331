//! Infrastructure services

mod edit_service;
mod front_service;
mod listing_service;
mod registration_service;

pub use edit_service::{EditForm, EditService, UPDATED};
pub use front_service::{FrontCheck, FrontService};
pub use listing_service::{ListingService, UserPage, UserRow};
pub use registration_service::{RegistrationForm, RegistrationService, LOGIN_NONCE_ACTION};
