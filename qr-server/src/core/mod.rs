//! Core module - server configuration, state and HTTP server
//!
//! - [`Config`] - environment-driven server configuration
//! - [`ServerState`] - shared state handed to handlers
//! - [`Server`] - HTTP server lifecycle

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
