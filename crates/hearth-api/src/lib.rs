//! # hearth-api
//!
//! The wire layer: a shared authenticated HTTP client plus one module per
//! backend resource.
//!
//! [`ApiClient`] owns the base URL, the underlying `reqwest::Client`, and the
//! current bearer token.  Every endpoint function in the resource modules
//! takes `&ApiClient` and returns `Result<_, ApiError>`; nothing here holds
//! session state beyond the token itself, which the session layer sets and
//! clears.

pub mod admin;
pub mod albums;
pub mod audio;
pub mod auth;
pub mod background;
pub mod client;
pub mod files;
pub mod photos;
pub mod vignettes;

mod error;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::{ApiClient, MediaResponse};
pub use error::ApiError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
