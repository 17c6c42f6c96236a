//! Per-element media loading with a strict handle lifecycle.
//!
//! One [`MediaLoader`] backs one mounted media element.  Its life runs
//! `Idle -> Loading -> Ready | Error`, returning to `Loading` only when the
//! source changes.  A source change supersedes (does not cancel) any
//! in-flight fetch; the superseded response is discarded when it lands so a
//! slow request can never display the wrong item's content.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use hearth_api::ApiClient;

use crate::handle::{HandleRegistry, ResourceHandle};

/// Which binary endpoint a source maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photo,
    Audio,
    File,
}

/// Identifier of one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub id: i64,
}

impl MediaSource {
    pub fn photo(id: i64) -> Self {
        Self {
            kind: MediaKind::Photo,
            id,
        }
    }

    pub fn audio(id: i64) -> Self {
        Self {
            kind: MediaKind::Audio,
            id,
        }
    }

    pub fn file(id: i64) -> Self {
        Self {
            kind: MediaKind::File,
            id,
        }
    }

    fn path(&self) -> String {
        match self.kind {
            MediaKind::Photo => hearth_api::photos::media_path(self.id),
            MediaKind::Audio => hearth_api::audio::media_path(self.id),
            MediaKind::File => hearth_api::files::media_path(self.id),
        }
    }
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            MediaKind::Photo => "photo",
            MediaKind::Audio => "audio",
            MediaKind::File => "file",
        };
        write!(f, "{kind}/{}", self.id)
    }
}

/// Externally visible loader status.  The caller renders a placeholder for
/// `Loading`/`Error` (keeping its reserved footprint) and the handle's URL
/// for `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPhase {
    Idle,
    Loading,
    Ready,
    Error,
}

enum Status {
    Idle,
    Loading,
    Ready(ResourceHandle),
    Error,
}

impl Status {
    fn phase(&self) -> MediaPhase {
        match self {
            Status::Idle => MediaPhase::Idle,
            Status::Loading => MediaPhase::Loading,
            Status::Ready(_) => MediaPhase::Ready,
            Status::Error => MediaPhase::Error,
        }
    }
}

struct LoaderState {
    generation: u64,
    source: Option<MediaSource>,
    status: Status,
}

/// Loader for a single mounted media element.
///
/// Owns at most one in-flight request and at most one [`ResourceHandle`] at
/// a time.  Methods take `&self`; share the loader behind an `Arc` when the
/// fetch should be driven from a spawned task.
pub struct MediaLoader {
    api: Arc<ApiClient>,
    registry: HandleRegistry,
    state: Mutex<LoaderState>,
}

impl MediaLoader {
    pub fn new(api: Arc<ApiClient>, registry: HandleRegistry) -> Self {
        Self {
            api,
            registry,
            state: Mutex::new(LoaderState {
                generation: 0,
                source: None,
                status: Status::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Fetch `source` and install its handle.
    ///
    /// Re-invoking with the source already loading, ready, or failed is a
    /// no-op -- `Ready` and `Error` are terminal per source, and renders must
    /// not trigger re-fetches.  Errors are fully contained: the loader
    /// reports [`MediaPhase::Error`] instead of propagating.
    pub async fn load(&self, source: MediaSource) -> MediaPhase {
        let (generation, path) = {
            let mut state = self.lock();
            if state.source == Some(source) && !matches!(state.status, Status::Idle) {
                return state.status.phase();
            }

            // Supersede whatever was here: bump the generation so a late
            // response for the old source is discarded, and drop the old
            // handle before its replacement exists.
            state.generation += 1;
            state.source = Some(source);
            state.status = Status::Loading;
            (state.generation, source.path())
        };

        debug!(%source, "fetching media");

        match self.api.get_media(&path).await {
            Ok(media) => {
                let mut state = self.lock();
                if state.generation != generation {
                    // The source changed while this request was in flight.
                    // The bytes are dropped without ever being registered.
                    debug!(%source, "discarding superseded media response");
                    return state.status.phase();
                }
                let handle = self.registry.register(media.bytes, media.content_type);
                state.status = Status::Ready(handle);
                state.status.phase()
            }
            Err(err) => {
                let mut state = self.lock();
                if state.generation != generation {
                    return state.status.phase();
                }
                warn!(%source, error = %err, "media fetch failed");
                state.status = Status::Error;
                state.status.phase()
            }
        }
    }

    /// Current phase.
    pub fn phase(&self) -> MediaPhase {
        self.lock().status.phase()
    }

    /// URL of the ready handle, if any.
    pub fn handle_url(&self) -> Option<String> {
        match &self.lock().status {
            Status::Ready(handle) => Some(handle.url().to_string()),
            _ => None,
        }
    }

    /// The source currently shown or being fetched.
    pub fn source(&self) -> Option<MediaSource> {
        self.lock().source
    }

    /// Release the handle and return to `Idle` (the unmount path).
    ///
    /// Any in-flight fetch is superseded; its response will be discarded.
    pub fn release(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.source = None;
        state.status = Status::Idle;
    }
}
