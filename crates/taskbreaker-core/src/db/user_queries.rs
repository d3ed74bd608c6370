//! User preference storage.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::conversion_error;
use crate::{
    error::{DatabaseResultExt, Result},
    models::Preferences,
};

const SELECT_PREFERENCES_SQL: &str = "SELECT preferences FROM users WHERE user_id = ?1";
const UPSERT_PREFERENCES_SQL: &str = "INSERT INTO users (user_id, preferences, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) \
     ON CONFLICT(user_id) DO UPDATE SET preferences = excluded.preferences, updated_at = excluded.updated_at";

impl super::Database {
    /// Returns the stored preferences of `user_id`, or the defaults when the
    /// user has never saved any.
    pub fn get_preferences(&self, user_id: &str) -> Result<Preferences> {
        let preferences = self
            .connection
            .query_row(SELECT_PREFERENCES_SQL, params![user_id], |row| {
                let raw: String = row.get(0)?;
                serde_json::from_str::<Preferences>(&raw).map_err(|e| conversion_error(0, e))
            })
            .optional()
            .db_context("Failed to query preferences")?;

        Ok(preferences.unwrap_or_default())
    }

    /// Creates or replaces the preferences of `user_id`.
    pub fn set_preferences(&mut self, user_id: &str, preferences: &Preferences) -> Result<()> {
        let json = serde_json::to_string(preferences)?;
        self.connection
            .execute(
                UPSERT_PREFERENCES_SQL,
                params![user_id, json, Timestamp::now().to_string()],
            )
            .db_context("Failed to store preferences")?;
        Ok(())
    }
}
