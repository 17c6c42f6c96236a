use thiserror::Error;

/// Errors produced by the wire layer.
///
/// The variants follow the failure taxonomy the rest of the workspace relies
/// on: authentication failures (401) are distinct from authorization failures
/// (403), and both are distinct from transport failures, which carry no
/// server response at all.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401 -- bad credentials or an expired/invalid token.  The message is
    /// the backend's own, surfaced unchanged.
    #[error("{0}")]
    Unauthorized(String),

    /// 403 -- authenticated but the role does not permit the operation.
    #[error("{0}")]
    Forbidden(String),

    /// 404 -- the addressed record does not exist (or is not visible).
    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a server response.
    #[error("cannot reach server: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not decode as expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures caused by a missing/expired/invalid token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// True when no server response was received at all.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
