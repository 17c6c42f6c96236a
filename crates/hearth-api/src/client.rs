//! Shared authenticated HTTP client.
//!
//! One [`ApiClient`] is created per application and shared (behind `Arc`) by
//! the session layer, the media loaders, and every content operation.  The
//! bearer token lives here so that setting or clearing it takes effect for
//! all subsequent requests immediately -- logout must invalidate in-flight
//! callers synchronously, not on some later refresh.

use std::sync::RwLock;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{multipart, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::Result;

/// Binary response body plus the content type the server declared.
#[derive(Debug, Clone)]
pub struct MediaResponse {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// HTTP client bound to one backend instance.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `https://journal.example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            bearer: RwLock::new(None),
        }
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token attached to every subsequent request.
    ///
    /// Takes effect synchronously; callers holding a reference to this client
    /// see the change on their very next request.
    pub fn set_bearer_token(&self, token: Option<String>) {
        match self.bearer.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// The currently attached bearer token, if any.
    pub fn bearer_token(&self) -> Option<String> {
        match self.bearer.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = %method, path, "api request");
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.bearer_token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    /// Send a built request and map non-2xx statuses to the error taxonomy.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(response).await;
        Err(match status.as_u16() {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            code => ApiError::Api {
                status: code,
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::PATCH, path).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST a `application/x-www-form-urlencoded` body (the login endpoint).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, path).form(fields))
            .await?;
        Self::decode(response).await
    }

    /// POST a multipart form (file uploads).
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, path).multipart(form))
            .await?;
        Self::decode(response).await
    }

    /// POST with no body, decoding the (JSON) response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.request(Method::POST, path)).await?;
        Self::decode(response).await
    }

    /// DELETE, discarding the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// GET a binary body (photo/audio/file content).  Media requests go
    /// through the same bearer attachment as everything else; this is the
    /// whole reason the loader exists instead of handing URLs to a viewer.
    pub async fn get_media(&self, path: &str) -> Result<MediaResponse> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response.bytes().await?;
        Ok(MediaResponse {
            bytes,
            content_type,
        })
    }
}

/// Pull the backend's own message out of an error response.
///
/// The backend wraps errors as `{"detail": "..."}`; fall back to the raw body
/// or the status reason when that shape is absent.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.bytes().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    match std::str::from_utf8(&body) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spawn_stub;
    use axum::http::HeaderMap;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    async fn echo_auth(headers: HeaderMap) -> Json<serde_json::Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(serde_json::json!({ "auth": auth }))
    }

    #[tokio::test]
    async fn bearer_token_is_attached_and_removable() {
        let base = spawn_stub(Router::new().route("/api/echo", get(echo_auth))).await;
        let api = ApiClient::new(base);

        let before: serde_json::Value = api.get_json("/api/echo").await.unwrap();
        assert_eq!(before["auth"], "");

        api.set_bearer_token(Some("tok1".into()));
        let during: serde_json::Value = api.get_json("/api/echo").await.unwrap();
        assert_eq!(during["auth"], "Bearer tok1");

        api.set_bearer_token(None);
        let after: serde_json::Value = api.get_json("/api/echo").await.unwrap();
        assert_eq!(after["auth"], "");
    }

    #[tokio::test]
    async fn backend_detail_message_is_surfaced_unchanged() {
        let router = Router::new().route(
            "/api/fail",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({ "detail": "Incorrect username or password" })),
                )
            }),
        );
        let base = spawn_stub(router).await;
        let api = ApiClient::new(base);

        let err = api
            .get_json::<serde_json::Value>("/api/fail")
            .await
            .unwrap_err();
        match err {
            ApiError::Unauthorized(message) => {
                assert_eq!(message, "Incorrect username or password");
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn status_codes_map_to_taxonomy() {
        let router = Router::new()
            .route("/api/gone", get(|| async { StatusCode::NOT_FOUND }))
            .route("/api/verboten", get(|| async { StatusCode::FORBIDDEN }))
            .route(
                "/api/teapot",
                get(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
            );
        let base = spawn_stub(router).await;
        let api = ApiClient::new(base);

        assert!(matches!(
            api.get_json::<serde_json::Value>("/api/gone").await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            api.get_json::<serde_json::Value>("/api/verboten").await,
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            api.get_json::<serde_json::Value>("/api/teapot").await,
            Err(ApiError::Api { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is about as unlistened as it gets.
        let api = ApiClient::new("http://127.0.0.1:9");
        let err = api
            .get_json::<serde_json::Value>("/api/echo")
            .await
            .unwrap_err();
        assert!(err.is_transport_error());
        assert!(!err.is_auth_error());
    }
}
