use thiserror::Error;

use hearth_api::ApiError;
use hearth_store::StoreError;

/// Errors surfaced by the session layer.
///
/// Backend errors pass through transparently so a form can show the server's
/// own message; local persistence failures keep their store context.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The operation was superseded by a newer login/logout before its
    /// response arrived; its result was discarded, not applied.
    #[error("superseded by a newer session operation")]
    Superseded,
}

impl ClientError {
    /// True for failures caused by a missing/expired/invalid token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Api(err) if err.is_auth_error())
    }
}
