//! Session state: the single source of truth for "who is logged in".
//!
//! The [`SessionStore`] is the sole writer of the token/user pair.  It owns
//! the persisted token (through `hearth-store`), the attached bearer header
//! (through the shared `ApiClient`), and the in-memory user.  All three move
//! together: login sets them, logout and a failed restore clear them.
//!
//! Lock discipline: the session mutex is never held across an await, and
//! when both the session and database locks are needed the session lock is
//! taken first.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use hearth_api::auth::{self, RegisterRequest};
use hearth_api::ApiClient;
use hearth_shared::User;
use hearth_store::Database;

use crate::error::ClientError;

/// Snapshot of the session, as consumed by the access gate and the views.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Option<User>,
    /// True only while the startup token confirmation is in flight.
    pub loading: bool,
}

struct SessionInner {
    user: Option<User>,
    loading: bool,
    /// Bumped by every login attempt and logout.  A completed operation is
    /// applied only if the epoch still matches the one it started with, so
    /// a slow response can never overwrite a newer session state.
    epoch: u64,
}

/// Holds and mutates the authenticated session.
pub struct SessionStore {
    api: Arc<ApiClient>,
    db: Mutex<Database>,
    inner: Mutex<SessionInner>,
}

impl SessionStore {
    /// Create a store over the shared client and the local database.
    ///
    /// The session starts in `loading = true`; call [`restore`] once at
    /// startup to resolve it.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(api: Arc<ApiClient>, db: Database) -> Self {
        Self {
            api,
            db: Mutex::new(db),
            inner: Mutex::new(SessionInner {
                user: None,
                loading: true,
                epoch: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn db(&self) -> MutexGuard<'_, Database> {
        match self.db.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        let inner = self.lock();
        Session {
            user: inner.user.clone(),
            loading: inner.loading,
        }
    }

    /// Resolve the persisted token at startup.
    ///
    /// With no persisted token the session simply leaves `loading`.  With
    /// one, the token is attached and confirmed against the identity
    /// endpoint; any failure -- expired token, revoked account, unreachable
    /// server -- is treated as logged-out and clears the token everywhere.
    /// `loading` ends false on every path.
    pub async fn restore(&self) -> Result<Session, ClientError> {
        let token = {
            let mut inner = self.lock();
            inner.loading = true;
            self.db().load_token()?
        };

        let Some(token) = token else {
            debug!("no persisted session");
            self.lock().loading = false;
            return Ok(self.session());
        };

        self.api.set_bearer_token(Some(token));
        let epoch = {
            let mut inner = self.lock();
            inner.epoch += 1;
            inner.epoch
        };

        match auth::me(&self.api).await {
            Ok(user) => {
                let mut inner = self.lock();
                if inner.epoch == epoch {
                    info!(username = %user.username, "session restored");
                    inner.user = Some(user);
                }
                inner.loading = false;
            }
            Err(err) => {
                warn!(error = %err, "session restore failed, clearing persisted token");
                let mut inner = self.lock();
                if inner.epoch == epoch {
                    self.api.set_bearer_token(None);
                    if let Err(store_err) = self.db().clear_token() {
                        warn!(error = %store_err, "failed to clear persisted token");
                    }
                    inner.user = None;
                }
                inner.loading = false;
            }
        }

        Ok(self.session())
    }

    /// Exchange credentials for a session.
    ///
    /// Single attempt; a failure propagates the backend's message unchanged
    /// and leaves the session as it was.  On success the token is attached
    /// to the shared client and persisted before the user becomes visible.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ClientError> {
        let epoch = {
            let mut inner = self.lock();
            inner.epoch += 1;
            inner.epoch
        };

        let response = auth::login(&self.api, username, password).await?;

        let mut inner = self.lock();
        if inner.epoch != epoch {
            debug!(username, "discarding superseded login response");
            return Err(ClientError::Superseded);
        }

        self.api.set_bearer_token(Some(response.access_token.clone()));
        self.db().save_token(&response.access_token)?;
        inner.user = Some(response.user.clone());

        info!(username = %response.user.username, "logged in");
        Ok(response.user)
    }

    /// Create an account and immediately log it in.
    ///
    /// The backend validates the invite code (existence, expiry, optional
    /// email restriction).  A failure in the chained login surfaces as a
    /// registration failure -- registration never "succeeds" without a
    /// session.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, ClientError> {
        let created = auth::register(&self.api, &request).await?;
        debug!(username = %created.username, "account created, performing initial login");
        self.login(&request.username, &request.password).await
    }

    /// Drop the session: user, persisted token, and attached header.
    ///
    /// Synchronous so that no request issued after this call can still carry
    /// the old token.  Idempotent.
    pub fn logout(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.user = None;

        self.api.set_bearer_token(None);
        if let Err(err) = self.db().clear_token() {
            warn!(error = %err, "failed to clear persisted token");
        }

        info!("logged out");
    }

    /// Change the current account's password.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        auth::change_password(&self.api, current_password, new_password).await?;
        info!("password changed");
        Ok(())
    }

    /// Ask the backend to email a self-service reset token.
    pub async fn password_reset_request(&self, email: &str) -> Result<(), ClientError> {
        auth::password_reset_request(&self.api, email).await?;
        Ok(())
    }

    /// Redeem a reset token for a new password.
    pub async fn password_reset(&self, token: &str, new_password: &str) -> Result<(), ClientError> {
        auth::password_reset(&self.api, token, new_password).await?;
        Ok(())
    }
}
