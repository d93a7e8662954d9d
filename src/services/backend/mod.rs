//! Recommendation backend abstraction
//!
//! Every read and write the client performs goes through this trait, so the
//! views and the preference store can run against the real HTTP backend or a
//! mock in tests.

use crate::{
    error::AppResult,
    models::{
        FeedbackRequest, NewPreference, Preference, PreferenceId, SuggestionRequest,
        SuggestionResponse,
    },
};

pub mod http;

pub use http::HttpBackend;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// `GET /users/{user_id}/preferences`
    async fn list_preferences(&self, user_id: &str) -> AppResult<Vec<Preference>>;

    /// `POST /users/{user_id}/preferences`
    async fn create_preference(
        &self,
        user_id: &str,
        preference: NewPreference,
    ) -> AppResult<Preference>;

    /// `PUT /users/{user_id}/preferences/{preference_id}`
    async fn update_preference(
        &self,
        user_id: &str,
        preference_id: PreferenceId,
        preference: NewPreference,
    ) -> AppResult<Preference>;

    /// `DELETE /users/{user_id}/preferences/{preference_id}`
    async fn delete_preference(&self, user_id: &str, preference_id: PreferenceId)
        -> AppResult<()>;

    /// `POST /suggestions`
    async fn suggestions(&self, request: SuggestionRequest) -> AppResult<SuggestionResponse>;

    /// `POST /feedback`
    async fn submit_feedback(&self, feedback: FeedbackRequest) -> AppResult<()>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
