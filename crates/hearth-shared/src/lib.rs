//! # hearth-shared
//!
//! Domain models and authorization primitives shared by every Hearth crate.
//!
//! The structs in [`models`] mirror the records the backend returns; they are
//! plain data with serde derives so they can cross the wire and be handed to
//! a UI layer unchanged.  [`role`] holds the single authorization predicate
//! the rest of the workspace consults.

pub mod models;
pub mod role;

pub use models::*;
pub use role::{can_access, Role};
