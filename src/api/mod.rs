//! API layer - HTTP pages, action endpoints and middleware

pub mod actions;
pub mod assets;
pub mod health;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod types;
pub mod views;

pub use router::create_router_with_state;
pub use state::AppState;
