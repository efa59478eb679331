//! Flash message domain
//!
//! Handlers return a `FlashMessage`; the HTTP edge parks it in a
//! `FlashStore` for exactly one read by the page behind the redirect.

mod message;
mod store;

pub use message::{Alert, FlashMessage};
pub use store::{FlashStore, FlashToken};
