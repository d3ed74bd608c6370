//! Preference operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::Preferences,
    params::{SetPreferences, UserRef},
};

impl Planner {
    /// Returns the user's preferences, or the defaults when none are saved.
    pub async fn preferences(&self, params: &UserRef) -> Result<Preferences> {
        let user_id = params.user_id.clone();
        self.with_database(move |db| db.get_preferences(&user_id))
            .await
    }

    /// Applies a partial preference update and returns the stored result.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When `max_hours_per_day` is outside
    ///   1..=24 or `work_days` is empty
    pub async fn set_preferences(&self, params: &SetPreferences) -> Result<Preferences> {
        let params = params.clone();

        self.with_database(move |db| {
            let current = db.get_preferences(&params.user_id)?;
            let updated = params.apply(current)?;
            db.set_preferences(&params.user_id, &updated)?;
            Ok(updated)
        })
        .await
    }
}
