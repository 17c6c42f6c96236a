//! Application facade.
//!
//! [`App`] wires the pieces an embedding shell needs: one shared
//! [`ApiClient`], the local database, the session store over both, and the
//! media handle registry.  Content operations are reached through
//! [`App::api`] and the `hearth-api` modules; per-element media loading
//! through [`App::new_loader`].

use std::path::Path;
use std::sync::Arc;

use hearth_api::ApiClient;
use hearth_media::{HandleRegistry, MediaLoader};
use hearth_store::{AppSettings, Database};

use crate::error::ClientError;
use crate::session::SessionStore;

/// One running Hearth client.
pub struct App {
    api: Arc<ApiClient>,
    session: SessionStore,
    registry: HandleRegistry,
    settings: AppSettings,
}

impl App {
    /// Open the default local database and connect to `server_url`.
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_database(server_url, Database::new()?)
    }

    /// Open the default local database and connect to the server recorded in
    /// its saved settings.
    pub fn from_saved_settings() -> Result<Self, ClientError> {
        let db = Database::new()?;
        let server_url = db.get_settings()?.server_url;
        Self::with_database(&server_url, db)
    }

    /// Open the database at an explicit path (tests, portable installs).
    pub fn open_at(server_url: &str, db_path: &Path) -> Result<Self, ClientError> {
        Self::with_database(server_url, Database::open_at(db_path)?)
    }

    /// Build the facade over an already open database.
    pub fn with_database(server_url: &str, db: Database) -> Result<Self, ClientError> {
        let settings = db.get_settings()?;
        let api = Arc::new(ApiClient::new(server_url));
        let session = SessionStore::new(api.clone(), db);

        Ok(Self {
            api,
            session,
            registry: HandleRegistry::new(),
            settings,
        })
    }

    /// The shared authenticated HTTP client.
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// The session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The media handle registry (for resolving handle URLs).
    pub fn media_registry(&self) -> &HandleRegistry {
        &self.registry
    }

    /// Settings loaded at startup.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Create a loader for one mounted media element.
    pub fn new_loader(&self) -> MediaLoader {
        MediaLoader::new(self.api.clone(), self.registry.clone())
    }
}
