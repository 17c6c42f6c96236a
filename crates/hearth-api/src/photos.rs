//! Photo endpoints.
//!
//! `GET /api/photos/:id` returns the image bytes, not metadata -- that path
//! is consumed through the media loader, which owns the handle lifecycle.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use hearth_shared::Photo;

use crate::client::ApiClient;
use crate::Result;

/// A photo upload: raw bytes plus the metadata form fields.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PhotoUpload {
    fn into_form(self) -> Result<Form> {
        let mut part = Part::bytes(self.data).file_name(self.file_name);
        if let Some(content_type) = &self.content_type {
            part = part.mime_str(content_type)?;
        }
        let mut form = Form::new().part("file", part);
        if let Some(title) = self.title {
            form = form.text("title", title);
        }
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, Serialize)]
struct ReorderRequest {
    photo_ids: Vec<i64>,
}

pub async fn list(api: &ApiClient) -> Result<Vec<Photo>> {
    api.get_json("/api/photos").await
}

pub async fn upload(api: &ApiClient, upload: PhotoUpload) -> Result<Photo> {
    let form = upload.into_form()?;
    api.post_multipart("/api/photos", form).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/photos/{id}")).await
}

/// Persist a new display order for the gallery.
pub async fn reorder(api: &ApiClient, photo_ids: Vec<i64>) -> Result<()> {
    let _: serde_json::Value = api
        .post_json("/api/photos/reorder", &ReorderRequest { photo_ids })
        .await?;
    Ok(())
}

/// Path of the authenticated binary endpoint for a photo.
pub fn media_path(id: i64) -> String {
    format!("/api/photos/{id}")
}
