use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    cache::{QueryCache, QueryKey},
    cached,
    error::AppResult,
    models::{NewPreference, Preference, PreferenceId, PreferenceType},
    services::preference_store::PreferenceStore,
};

/// Render-facing snapshot of the editor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub open: bool,
    pub loading: bool,
    pub add_pending: bool,
    pub delete_pending: bool,
    pub draft_type: PreferenceType,
    pub draft_name: String,
}

/// Modal list of the user's preferences with an add form
///
/// The list is a cached query keyed per user that only runs while the editor
/// is open. Successful adds and deletes invalidate that query instead of
/// patching the list, so the next read shows the server's view in server
/// order.
#[derive(Clone)]
pub struct PreferencesEditor {
    store: PreferenceStore,
    cache: QueryCache,
    user_id: String,
    state: Arc<RwLock<EditorState>>,
}

impl PreferencesEditor {
    pub fn new(store: PreferenceStore, cache: QueryCache, user_id: impl Into<String>) -> Self {
        Self {
            store,
            cache,
            user_id: user_id.into(),
            state: Arc::new(RwLock::new(EditorState::default())),
        }
    }

    fn query_key(&self) -> QueryKey {
        QueryKey::Preferences(self.user_id.clone())
    }

    pub async fn state(&self) -> EditorState {
        self.state.read().await.clone()
    }

    pub async fn open(&self) {
        self.state.write().await.open = true;
    }

    pub async fn close(&self) {
        self.state.write().await.open = false;
    }

    pub async fn set_draft_type(&self, preference_type: PreferenceType) {
        self.state.write().await.draft_type = preference_type;
    }

    pub async fn set_draft_name(&self, name: impl Into<String>) {
        self.state.write().await.draft_name = name.into();
    }

    /// Whether the add button is enabled
    pub async fn can_add(&self) -> bool {
        let state = self.state.read().await;
        !state.draft_name.trim().is_empty() && !state.add_pending
    }

    /// The preference list; empty without a request while the editor is closed
    pub async fn preferences(&self) -> AppResult<Vec<Preference>> {
        if !self.state.read().await.open {
            return Ok(Vec::new());
        }

        let result = self.query().await;
        self.state.write().await.loading = false;
        result
    }

    async fn query(&self) -> AppResult<Vec<Preference>> {
        let key = self.query_key();
        cached!(self.cache, key, async {
            self.state.write().await.loading = true;
            self.store.fetch_preferences(&self.user_id).await
        })
    }

    /// Submits the draft; returns `None` without a request when the name is blank
    pub async fn add_preference(&self) -> AppResult<Option<Preference>> {
        let preference = {
            let mut state = self.state.write().await;
            let name = state.draft_name.trim();
            if name.is_empty() {
                return Ok(None);
            }
            let preference = NewPreference::new(state.draft_type, name);
            state.add_pending = true;
            preference
        };

        let result = self.store.add_preference(&self.user_id, preference).await;
        self.state.write().await.add_pending = false;
        let created = result?;

        self.cache.invalidate(&self.query_key()).await;
        self.state.write().await.draft_name.clear();
        Ok(Some(created))
    }

    pub async fn delete_preference(&self, preference_id: PreferenceId) -> AppResult<()> {
        self.state.write().await.delete_pending = true;
        let result = self
            .store
            .delete_preference(&self.user_id, preference_id)
            .await;
        self.state.write().await.delete_pending = false;
        result?;

        self.cache.invalidate(&self.query_key()).await;
        Ok(())
    }

    /// Replaces a preference's type, name and score
    pub async fn update_preference(
        &self,
        preference_id: PreferenceId,
        preference: NewPreference,
    ) -> AppResult<Preference> {
        let updated = self
            .store
            .update_preference(&self.user_id, preference_id, preference)
            .await?;

        self.cache.invalidate(&self.query_key()).await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::DEFAULT_SCORE;
    use crate::services::backend::MockRecommendationBackend;
    use mockall::Sequence;
    use reqwest::StatusCode;
    use tokio_test::{assert_err, assert_ok};

    fn pref(id: PreferenceId, name: &str) -> Preference {
        Preference {
            id,
            preference_type: PreferenceType::Cuisine,
            preference_name: name.to_string(),
            score: DEFAULT_SCORE,
        }
    }

    fn editor(backend: MockRecommendationBackend) -> PreferencesEditor {
        let store = PreferenceStore::new(Arc::new(backend));
        PreferencesEditor::new(store, QueryCache::new(), "123")
    }

    #[tokio::test]
    async fn test_closed_editor_does_not_query() {
        let mut backend = MockRecommendationBackend::new();
        backend.expect_list_preferences().times(0);

        let editor = editor(backend);
        assert_eq!(editor.preferences().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_open_editor_queries_once_then_serves_cache() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_list_preferences()
            .withf(|user_id| user_id == "123")
            .times(1)
            .returning(|_| Ok(vec![pref(1, "Italian"), pref(2, "Thai")]));

        let editor = editor(backend);
        editor.open().await;

        let first = editor.preferences().await.unwrap();
        let second = editor.preferences().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[1].preference_name, "Thai");
        assert!(!editor.state().await.loading);
    }

    #[tokio::test]
    async fn test_blank_name_sends_nothing() {
        let mut backend = MockRecommendationBackend::new();
        backend.expect_create_preference().times(0);

        let editor = editor(backend);
        editor.set_draft_name("   ").await;

        assert!(!editor.can_add().await);
        assert_eq!(editor.add_preference().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_trims_name_clears_draft_and_refetches() {
        let mut backend = MockRecommendationBackend::new();
        let mut seq = Sequence::new();
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![]));
        backend
            .expect_create_preference()
            .withf(|user_id, p| {
                user_id == "123"
                    && p.preference_name == "Fine Dining"
                    && p.preference_type == PreferenceType::Category
                    && p.score == DEFAULT_SCORE
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, p| {
                Ok(Preference {
                    id: 5,
                    preference_type: p.preference_type,
                    preference_name: p.preference_name,
                    score: p.score,
                })
            });
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![pref(5, "Fine Dining")]));

        let editor = editor(backend);
        editor.open().await;
        assert!(editor.preferences().await.unwrap().is_empty());

        editor.set_draft_type(PreferenceType::Category).await;
        editor.set_draft_name("  Fine Dining ").await;
        let created = editor.add_preference().await.unwrap().unwrap();
        assert_eq!(created.id, 5);

        let state = editor.state().await;
        assert!(state.draft_name.is_empty());
        assert_eq!(state.draft_type, PreferenceType::Category);
        assert!(!state.add_pending);

        let listed = editor.preferences().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_add_keeps_draft_and_cache() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_list_preferences()
            .times(1)
            .returning(|_| Ok(vec![pref(1, "Italian")]));
        backend.expect_create_preference().times(1).returning(|_, _| {
            Err(AppError::Api {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Failed to add preference".to_string(),
            })
        });

        let editor = editor(backend);
        editor.open().await;
        assert_ok!(editor.preferences().await);

        editor.set_draft_name("Ramen").await;
        assert_err!(editor.add_preference().await);

        let state = editor.state().await;
        assert_eq!(state.draft_name, "Ramen");
        assert!(!state.add_pending);
        assert_eq!(editor.preferences().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refetches_without_deleted_id() {
        let mut backend = MockRecommendationBackend::new();
        let mut seq = Sequence::new();
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![pref(1, "Italian"), pref(2, "Thai")]));
        backend
            .expect_delete_preference()
            .withf(|user_id, id| user_id == "123" && *id == 1)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![pref(2, "Thai")]));

        let editor = editor(backend);
        editor.open().await;
        assert_eq!(editor.preferences().await.unwrap().len(), 2);

        editor.delete_preference(1).await.unwrap();
        assert!(!editor.state().await.delete_pending);

        let remaining = editor.preferences().await.unwrap();
        assert!(remaining.iter().all(|p| p.id != 1));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let mut backend = MockRecommendationBackend::new();
        let mut seq = Sequence::new();
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::Internal("connection reset".to_string())));
        backend
            .expect_list_preferences()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![pref(3, "Quiet")]));

        let editor = editor(backend);
        editor.open().await;

        assert!(editor.preferences().await.is_err());
        assert!(!editor.state().await.loading);
        assert_eq!(editor.preferences().await.unwrap()[0].id, 3);
    }

    #[tokio::test]
    async fn test_update_invalidates_list() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_list_preferences()
            .times(2)
            .returning(|_| Ok(vec![pref(1, "Italian")]));
        backend
            .expect_update_preference()
            .times(1)
            .returning(|_, id, p| {
                Ok(Preference {
                    id,
                    preference_type: p.preference_type,
                    preference_name: p.preference_name,
                    score: p.score,
                })
            });

        let editor = editor(backend);
        editor.open().await;
        editor.preferences().await.unwrap();

        let mut change = NewPreference::new(PreferenceType::Cuisine, "Italian");
        change.score = 1.0;
        let updated = editor.update_preference(1, change).await.unwrap();
        assert_eq!(updated.score, 1.0);

        editor.preferences().await.unwrap();
    }
}
