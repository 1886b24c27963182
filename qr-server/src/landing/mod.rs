//! Landing Module
//!
//! Resolves a scanned QR configuration into the payload the landing page
//! renders: a redirect instruction or a composed page (links, menu,
//! vitrine, first product) plus the detected display language.

pub mod language;
pub mod resolver;

pub use language::{Language, detect_language};
pub use resolver::{LandingPage, PageContent, RedirectInfo, resolve};
