//! Utility module - logging setup
//!
//! Error and response types live in the `shared` crate; see
//! [`shared::error`].

pub mod logger;
