//! Vignette CRUD.

use serde::Serialize;

use hearth_shared::Vignette;

use crate::client::ApiClient;
use crate::Result;

/// Fields for creating or updating a vignette.  `photo_ids` is the ordered
/// set of linked photos; `None` leaves the links untouched on update.
#[derive(Debug, Clone, Serialize)]
pub struct VignetteDraft {
    pub title: String,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_ids: Option<Vec<i64>>,
}

pub async fn list(api: &ApiClient) -> Result<Vec<Vignette>> {
    api.get_json("/api/vignettes").await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Vignette> {
    api.get_json(&format!("/api/vignettes/{id}")).await
}

pub async fn create(api: &ApiClient, draft: &VignetteDraft) -> Result<Vignette> {
    api.post_json("/api/vignettes", draft).await
}

pub async fn update(api: &ApiClient, id: i64, draft: &VignetteDraft) -> Result<Vignette> {
    api.put_json(&format!("/api/vignettes/{id}"), draft).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/vignettes/{id}")).await
}
