//! Infrastructure layer - store, storage and service implementations

pub mod flash;
pub mod logging;
pub mod nonce;
pub mod services;
pub mod upload;
pub mod user;
