//! Flash store implementations

mod moka_store;

pub use moka_store::MokaFlashStore;
