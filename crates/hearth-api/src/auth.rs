//! Authentication endpoints.
//!
//! Login is form-encoded (the backend's OAuth2 password flow); everything
//! else is JSON.  Invite-code validation happens server-side during
//! registration -- the client only carries the code through.

use serde::{Deserialize, Serialize};

use hearth_shared::User;

use crate::client::ApiClient;
use crate::Result;

/// Payload returned by `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Fields for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub invite_code: String,
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Backend auth health probe (`GET /api/auth/health`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthHealth {
    pub status: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub user_count: Option<i64>,
}

/// Exchange credentials for a token.  Single attempt; retries are the user's.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<LoginResponse> {
    api.post_form(
        "/api/auth/login",
        &[("username", username), ("password", password)],
    )
    .await
}

/// Create an account.  Requires a redeemable invite code; the backend also
/// enforces the code's optional email restriction.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<User> {
    api.post_json("/api/auth/register", request).await
}

/// Confirm the attached token and fetch the account it belongs to.
pub async fn me(api: &ApiClient) -> Result<User> {
    api.get_json("/api/auth/me").await
}

/// Auth subsystem health probe.
pub async fn health(api: &ApiClient) -> Result<AuthHealth> {
    api.get_json("/api/auth/health").await
}

/// Change the current account's password.
pub async fn change_password(
    api: &ApiClient,
    current_password: &str,
    new_password: &str,
) -> Result<MessageResponse> {
    api.post_json(
        "/api/auth/change-password",
        &serde_json::json!({
            "current_password": current_password,
            "new_password": new_password,
        }),
    )
    .await
}

/// Ask the backend to email a self-service reset token.
pub async fn password_reset_request(api: &ApiClient, email: &str) -> Result<MessageResponse> {
    api.post_json(
        "/api/auth/password-reset-request",
        &serde_json::json!({ "email": email }),
    )
    .await
}

/// Redeem a reset token for a new password.
pub async fn password_reset(
    api: &ApiClient,
    token: &str,
    new_password: &str,
) -> Result<MessageResponse> {
    api.post_json(
        "/api/auth/password-reset",
        &serde_json::json!({ "token": token, "new_password": new_password }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spawn_stub;
    use axum::extract::Form;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct LoginForm {
        username: String,
        password: String,
    }

    fn stub_user_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "username": "alice",
            "email": "alice@example.com",
            "full_name": "Alice",
            "is_admin": false,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_sends_form_fields_and_decodes_token() {
        let router = Router::new().route(
            "/api/auth/login",
            post(|Form(form): Form<LoginForm>| async move {
                if form.username == "alice" && form.password == "correct" {
                    Json(serde_json::json!({
                        "access_token": "tok1",
                        "token_type": "bearer",
                        "user": stub_user_json(),
                    }))
                    .into_response()
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(serde_json::json!({ "detail": "Incorrect username or password" })),
                    )
                        .into_response()
                }
            }),
        );
        let base = spawn_stub(router).await;
        let api = ApiClient::new(base);

        let response = login(&api, "alice", "correct").await.unwrap();
        assert_eq!(response.access_token, "tok1");
        assert_eq!(response.user.username, "alice");

        let err = login(&api, "alice", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
    }
}
