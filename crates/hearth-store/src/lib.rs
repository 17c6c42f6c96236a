//! # hearth-store
//!
//! Local persistence for the Hearth client: the session token that survives
//! restarts and the app settings blob.  The crate exposes a synchronous
//! [`Database`] handle that wraps a `rusqlite::Connection`; migrations run on
//! every open.

pub mod database;
pub mod migrations;
pub mod session;
pub mod settings;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use settings::AppSettings;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
