use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{NewPreference, Preference, PreferenceId},
    services::backend::RecommendationBackend,
};

/// Process-wide holder of the user's saved preferences
///
/// Every operation delegates straight to the backend. There is no local
/// validation, retry or conflict resolution: failures are logged and handed
/// back to the caller unchanged. Only `fetch_preferences` updates the held
/// list; writes leave it alone until the next fetch.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn RecommendationBackend>,
    preferences: Arc<RwLock<Vec<Preference>>>,
}

impl PreferenceStore {
    pub fn new(backend: Arc<dyn RecommendationBackend>) -> Self {
        Self {
            backend,
            preferences: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the last fetched list
    pub async fn preferences(&self) -> Vec<Preference> {
        self.preferences.read().await.clone()
    }

    /// Fetches the user's preferences and replaces the held list
    pub async fn fetch_preferences(&self, user_id: &str) -> AppResult<Vec<Preference>> {
        let fetched = self
            .backend
            .list_preferences(user_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching preferences"))?;

        *self.preferences.write().await = fetched.clone();
        Ok(fetched)
    }

    pub async fn add_preference(
        &self,
        user_id: &str,
        preference: NewPreference,
    ) -> AppResult<Preference> {
        self.backend
            .create_preference(user_id, preference)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error adding preference"))
    }

    pub async fn update_preference(
        &self,
        user_id: &str,
        preference_id: PreferenceId,
        preference: NewPreference,
    ) -> AppResult<Preference> {
        self.backend
            .update_preference(user_id, preference_id, preference)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error updating preference"))
    }

    pub async fn delete_preference(
        &self,
        user_id: &str,
        preference_id: PreferenceId,
    ) -> AppResult<()> {
        self.backend
            .delete_preference(user_id, preference_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error deleting preference"))
    }
}
