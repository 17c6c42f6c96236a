//! Album endpoints: CRUD plus photo membership, background photo, and
//! display-order persistence.

use serde::Serialize;

use hearth_shared::{Album, AlbumDetail};

use crate::client::ApiClient;
use crate::Result;

/// Fields for creating an album.  `photo_ids` seeds the initial membership.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumDraft {
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize)]
struct ReorderRequest {
    photo_ids: Vec<i64>,
}

pub async fn list(api: &ApiClient) -> Result<Vec<Album>> {
    api.get_json("/api/albums").await
}

/// Album record plus its photos in display order.
pub async fn get(api: &ApiClient, id: i64) -> Result<AlbumDetail> {
    api.get_json(&format!("/api/albums/{id}")).await
}

pub async fn create(api: &ApiClient, draft: &AlbumDraft) -> Result<Album> {
    api.post_json("/api/albums", draft).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/albums/{id}")).await
}

pub async fn add_photo(api: &ApiClient, album_id: i64, photo_id: i64) -> Result<()> {
    let _: serde_json::Value = api
        .post_empty(&format!("/api/albums/{album_id}/photos/{photo_id}"))
        .await?;
    Ok(())
}

pub async fn remove_photo(api: &ApiClient, album_id: i64, photo_id: i64) -> Result<()> {
    api.delete(&format!("/api/albums/{album_id}/photos/{photo_id}"))
        .await
}

/// Mark one of the album's photos as its background/cover.
pub async fn set_background_photo(api: &ApiClient, album_id: i64, photo_id: i64) -> Result<()> {
    let _: serde_json::Value = api
        .post_empty(&format!("/api/albums/{album_id}/background/{photo_id}"))
        .await?;
    Ok(())
}

/// Persist a new photo order within the album.
pub async fn reorder(api: &ApiClient, album_id: i64, photo_ids: Vec<i64>) -> Result<()> {
    let _: serde_json::Value = api
        .post_json(
            &format!("/api/albums/{album_id}/reorder"),
            &ReorderRequest { photo_ids },
        )
        .await?;
    Ok(())
}
