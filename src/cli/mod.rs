//! CLI module for the signup portal
//!
//! Provides subcommands for running the portal:
//! - `serve`: HTTP server with pages, form actions and uploads (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Signup Portal - user self-registration, listing and editing
#[derive(Parser)]
#[command(name = "signup-portal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),
}
