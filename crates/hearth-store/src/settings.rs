//! App settings, stored as a single JSON row.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::Result;

/// Client preferences.  Anything the backend does not own lives here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Base URL of the backend instance this client talks to.
    pub server_url: String,
    pub theme: String,
    pub notifications_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            theme: "dark".into(),
            notifications_enabled: true,
        }
    }
}

impl Database {
    /// Load settings, falling back to defaults when none were saved yet.
    pub fn get_settings(&self) -> Result<AppSettings> {
        let json = self
            .conn()
            .query_row("SELECT json FROM app_settings WHERE id = 1", [], |row| {
                row.get::<_, String>(0)
            });

        match json {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(AppSettings::default()),
            Err(other) => Err(other.into()),
        }
    }

    /// Persist settings, replacing the previous row.
    pub fn update_settings(&self, settings: &AppSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO app_settings (id, json) VALUES (1, ?1)",
            params![json],
        )?;
        tracing::debug!("settings updated");
        Ok(())
    }
}
