//! Audio recording endpoints.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use hearth_shared::AudioRecording;

use crate::client::ApiClient;
use crate::Result;

/// An audio upload: recorded or imported bytes plus metadata.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_seconds: Option<i64>,
}

impl AudioUpload {
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
        if let Some(duration) = self.duration_seconds {
            form = form.text("duration_seconds", duration.to_string());
        }
        Ok(form)
    }
}

/// Metadata fields editable after upload.
#[derive(Debug, Clone, Serialize)]
pub struct AudioUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn list(api: &ApiClient) -> Result<Vec<AudioRecording>> {
    api.get_json("/api/audio").await
}

pub async fn upload(api: &ApiClient, upload: AudioUpload) -> Result<AudioRecording> {
    let form = upload.into_form()?;
    api.post_multipart("/api/audio", form).await
}

pub async fn update(api: &ApiClient, id: i64, update: &AudioUpdate) -> Result<AudioRecording> {
    api.put_json(&format!("/api/audio/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<()> {
    api.delete(&format!("/api/audio/{id}")).await
}

/// Path of the authenticated binary endpoint for a recording.
pub fn media_path(id: i64) -> String {
    format!("/api/audio/{id}")
}
