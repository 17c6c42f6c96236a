//! Miscellaneous file storage endpoints.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use hearth_shared::StoredFile;

use crate::client::ApiClient;
use crate::Result;

/// A file upload.  `source` tags which feature produced it so the admin
/// tooling can tell journal attachments from plain file storage.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
}

impl FileUpload {
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
        if let Some(source) = self.source {
            form = form.text("source", source);
        }
        Ok(form)
    }
}

/// Metadata fields editable after upload.
#[derive(Debug, Clone, Serialize)]
pub struct FileUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// List the caller's files, optionally filtered by source tag.
pub async fn list(api: &ApiClient, source: Option<&str>) -> Result<Vec<StoredFile>> {
    let path = match source {
        Some(source) => format!("/api/files?source={source}"),
        None => "/api/files".to_string(),
    };
    api.get_json(&path).await
}

pub async fn upload(api: &ApiClient, upload: FileUpload) -> Result<StoredFile> {
    let form = upload.into_form()?;
    api.post_multipart("/api/files", form).await
}

pub async fn update(api: &ApiClient, id: i64, update: &FileUpdate) -> Result<StoredFile> {
    api.put_json(&format!("/api/files/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/files/{id}")).await
}

/// Path of the authenticated binary endpoint for a stored file.
pub fn media_path(id: i64) -> String {
    format!("/api/files/{id}")
}
