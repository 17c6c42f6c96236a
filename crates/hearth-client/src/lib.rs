//! # hearth-client
//!
//! The stateful layer of the Hearth client: the session store (who is logged
//! in), the access gate (may this view render), and the [`App`] facade that
//! wires the shared HTTP client, the local database, and the media handle
//! registry together for an embedding shell.
//!
//! Content operations themselves live in `hearth-api`; this crate only adds
//! the state they run against.

pub mod app;
pub mod gate;
pub mod session;

mod error;

use tracing_subscriber::{fmt, EnvFilter};

pub use app::App;
pub use error::ClientError;
pub use gate::{evaluate, GateDecision};
pub use session::{Session, SessionStore};

/// Initialise the process-wide tracing subscriber.
///
/// Call once at startup; respects `RUST_LOG` and falls back to a sensible
/// per-crate default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("hearth_client=debug,hearth_api=debug,hearth_store=info,hearth_media=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
