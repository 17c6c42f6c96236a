//! Admin-only endpoints: invite codes, account management, the site
//! background, and the file-source repair tooling.
//!
//! The backend enforces the admin role on every route here; callers should
//! still gate the views through the authorization predicate so non-admins
//! are redirected before any of these are issued.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use hearth_shared::{BackgroundImage, InviteCode, InviteCodeWithUser, StoredFile, User};

use crate::client::ApiClient;
use crate::Result;

/// Fields for minting an invite code.
///
/// `email` restricts redemption to that address; `send_email` asks the
/// backend to mail the code out.  This flow is independent of the
/// self-service password reset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InviteCodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<i64>,
    pub send_email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

/// Result of the bulk file-source repair.
#[derive(Debug, Clone, Deserialize)]
pub struct FixFileSourcesResult {
    #[serde(default)]
    pub updated: i64,
}

// -- invite codes -----------------------------------------------------------

pub async fn create_invite_code(
    api: &ApiClient,
    request: &InviteCodeRequest,
) -> Result<InviteCode> {
    api.post_json("/api/admin/invite-codes", request).await
}

pub async fn list_invite_codes(api: &ApiClient) -> Result<Vec<InviteCodeWithUser>> {
    api.get_json("/api/admin/invite-codes").await
}

pub async fn delete_invite_code(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/admin/invite-codes/{id}")).await
}

// -- user accounts ----------------------------------------------------------

pub async fn list_users(api: &ApiClient) -> Result<Vec<User>> {
    api.get_json("/api/admin/users").await
}

pub async fn delete_user(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/admin/users/{id}")).await
}

/// Rename an account.
pub async fn update_username(api: &ApiClient, id: i64, username: &str) -> Result<User> {
    api.patch_json(
        &format!("/api/admin/users/{id}/username"),
        &serde_json::json!({ "username": username }),
    )
    .await
}

// -- site background --------------------------------------------------------

/// Upload a new site background image; the backend activates it.
pub async fn upload_background(
    api: &ApiClient,
    file_name: String,
    content_type: Option<&str>,
    data: Vec<u8>,
) -> Result<BackgroundImage> {
    let mut part = Part::bytes(data).file_name(file_name);
    if let Some(content_type) = content_type {
        part = part.mime_str(content_type)?;
    }
    let form = Form::new().part("file", part);
    api.post_multipart("/api/admin/background", form).await
}

pub async fn delete_background(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/admin/background/{id}")).await
}

// -- file source repair -----------------------------------------------------

/// Files whose `source` tag does not match the feature that owns them.
pub async fn mistagged_files(api: &ApiClient) -> Result<Vec<StoredFile>> {
    api.get_json("/api/admin/mistagged-files").await
}

/// Retag every mistagged file in one pass.
pub async fn fix_file_sources(api: &ApiClient) -> Result<FixFileSourcesResult> {
    api.post_empty("/api/admin/fix-file-sources").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::spawn_stub;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    #[tokio::test]
    async fn invite_code_round_trip() {
        let router = Router::new()
            .route(
                "/api/admin/invite-codes",
                post(|Json(body): Json<serde_json::Value>| async move {
                    Json(serde_json::json!({
                        "id": 7,
                        "code": "a-fresh-code",
                        "email": body.get("email"),
                        "is_used": false,
                        "created_by_id": 1,
                        "used_by_id": null,
                        "used_at": null,
                        "expires_at": null,
                        "created_at": "2024-01-01T00:00:00Z"
                    }))
                }),
            )
            .route(
                "/api/admin/invite-codes",
                get(|| async {
                    Json(serde_json::json!([{
                        "id": 7,
                        "code": "a-fresh-code",
                        "email": "kin@example.com",
                        "is_used": true,
                        "created_by_id": 1,
                        "used_by_id": 2,
                        "used_at": "2024-02-01T00:00:00Z",
                        "expires_at": null,
                        "created_at": "2024-01-01T00:00:00Z",
                        "used_by_username": "bob"
                    }]))
                }),
            );
        let base = spawn_stub(router).await;
        let api = ApiClient::new(base);

        let created = create_invite_code(
            &api,
            &InviteCodeRequest {
                email: Some("kin@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(created.code, "a-fresh-code");
        assert_eq!(created.email.as_deref(), Some("kin@example.com"));

        let listed = list_invite_codes(&api).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].used_by_username.as_deref(), Some("bob"));
        assert!(listed[0].invite.is_used);
    }
}
