//! Domain model structs as returned by the backend.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be decoded
//! straight from a response body and handed to the UI layer unchanged.
//! Identifiers are the backend's integer primary keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An account on the journal.  Owned by the backend; the client never mutates
/// it except through the explicit update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Grants access to the admin views and endpoints.
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Vignette
// ---------------------------------------------------------------------------

/// A short narrative entry, optionally linked to an ordered set of photos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vignette {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// Photo metadata.  The image bytes are fetched separately through the
/// authenticated binary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    pub id: i64,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub uploaded_by_id: i64,
    pub taken_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Album
// ---------------------------------------------------------------------------

/// A named collection of photos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_by_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Album detail as returned by `GET /api/albums/:id`: the album record plus
/// its photos in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Photo used as the album's background/cover, if one is set.
    pub background_photo_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

/// Audio recording metadata.  Bytes come from the binary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioRecording {
    pub id: i64,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author_id: i64,
    pub duration_seconds: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// A miscellaneous stored file.  `source` records which feature uploaded it
/// ("files", "vignette-pdf", ...) so admin tooling can spot mistagged rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFile {
    pub id: i64,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_type: Option<String>,
    pub source: Option<String>,
    pub uploaded_by_id: i64,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Invite code
// ---------------------------------------------------------------------------

/// A registration invite.  Single-use; optionally restricted to one email
/// address and optionally expiring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InviteCode {
    pub id: i64,
    pub code: String,
    pub email: Option<String>,
    #[serde(default)]
    pub is_used: bool,
    pub created_by_id: i64,
    pub used_by_id: Option<i64>,
    pub used_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl InviteCode {
    /// Whether the code has passed its expiry timestamp (if it has one).
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }

    /// Whether the code could still be redeemed: unused and unexpired.
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && !self.is_expired(now)
    }
}

/// Invite code annotated with the username that redeemed it, as returned by
/// the admin listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InviteCodeWithUser {
    #[serde(flatten)]
    pub invite: InviteCode,
    pub used_by_username: Option<String>,
}

// ---------------------------------------------------------------------------
// Background image
// ---------------------------------------------------------------------------

/// Site-wide background image record.  At most one is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackgroundImage {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub is_active: bool,
    pub uploaded_by_id: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invite(expires_at: Option<DateTime<Utc>>, is_used: bool) -> InviteCode {
        InviteCode {
            id: 1,
            code: "c0de".into(),
            email: None,
            is_used,
            created_by_id: 1,
            used_by_id: None,
            used_at: None,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn invite_without_expiry_never_expires() {
        let now = Utc::now();
        assert!(!invite(None, false).is_expired(now));
        assert!(invite(None, false).is_redeemable(now));
    }

    #[test]
    fn expired_invite_is_not_redeemable() {
        let now = Utc::now();
        let inv = invite(Some(now - Duration::days(1)), false);
        assert!(inv.is_expired(now));
        assert!(!inv.is_redeemable(now));
    }

    #[test]
    fn used_invite_is_not_redeemable() {
        let now = Utc::now();
        let inv = invite(Some(now + Duration::days(7)), true);
        assert!(!inv.is_expired(now));
        assert!(!inv.is_redeemable(now));
    }

    #[test]
    fn user_decodes_with_missing_admin_flag() {
        // Older backend builds omit is_admin; it must default to false.
        let json = r#"{
            "id": 3,
            "username": "alice",
            "email": null,
            "full_name": "Alice",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin);
        assert!(user.is_active);
    }
}
