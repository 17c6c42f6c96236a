//! Persisted session token.
//!
//! Exactly one token is stored at a time.  The session layer writes it on
//! login, reads it on startup, and clears it on logout or when the backend
//! rejects it during restore.

use rusqlite::params;

use crate::database::Database;
use crate::Result;

impl Database {
    /// Persist the bearer token, replacing any previous one.
    pub fn save_token(&self, token: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO session (id, token, saved_at)
             VALUES (1, ?1, datetime('now'))",
            params![token],
        )?;
        tracing::debug!("session token persisted");
        Ok(())
    }

    /// The persisted token, if one exists.
    pub fn load_token(&self) -> Result<Option<String>> {
        let token = self
            .conn()
            .query_row("SELECT token FROM session WHERE id = 1", [], |row| {
                row.get::<_, String>(0)
            });

        match token {
            Ok(token) => Ok(Some(token)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(other) => Err(other.into()),
        }
    }

    /// Remove the persisted token.  A no-op when none is stored.
    pub fn clear_token(&self) -> Result<()> {
        self.conn().execute("DELETE FROM session WHERE id = 1", [])?;
        tracing::debug!("session token cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.load_token().unwrap(), None);

        db.save_token("tok1").unwrap();
        assert_eq!(db.load_token().unwrap().as_deref(), Some("tok1"));

        // Replacement, not accumulation.
        db.save_token("tok2").unwrap();
        assert_eq!(db.load_token().unwrap().as_deref(), Some("tok2"));

        db.clear_token().unwrap();
        assert_eq!(db.load_token().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.clear_token().unwrap();
        db.clear_token().unwrap();
    }

    #[test]
    fn token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hearth.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.save_token("persisted").unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.load_token().unwrap().as_deref(), Some("persisted"));
    }
}
