//! # hearth-media
//!
//! Authenticated media retrieval.
//!
//! Native image/audio elements cannot attach an `Authorization` header to
//! their own requests, so binary content is fetched through the shared
//! [`ApiClient`](hearth_api::ApiClient) and materialised as a locally
//! addressable [`ResourceHandle`].  Handles are scoped acquisitions: each one
//! is owned by exactly one [`MediaLoader`] and released when that loader is
//! dropped, releases explicitly, or replaces it for a new source.  The
//! [`HandleRegistry`] tracks every live handle, which is what keeps resource
//! usage proportional to what is currently displayed rather than to
//! everything ever displayed.

pub mod handle;
pub mod loader;

pub use handle::{HandleRegistry, ResourceHandle};
pub use loader::{MediaKind, MediaLoader, MediaPhase, MediaSource};
