use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    cache::{QueryCache, QueryKey},
    error::AppResult,
    models::{Coordinates, FeedbackRating, FeedbackRequest, SuggestionRequest, SuggestionResponse},
    services::{backend::RecommendationBackend, geolocation::Geolocator},
};

/// Lifecycle of a suggestions request; exactly one is shown at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Pending,
    /// Last request failed; the message is shown with a "Try Again" action
    Error(String),
    /// Narrative and places from the last successful request
    Success(SuggestionResponse),
}

struct Inner {
    state: ViewState,
    location: Option<Coordinates>,
}

/// Acquires a position, asks the backend for suggestions and tracks the result
///
/// There is no retry policy or timeout: a failure parks the view in
/// `ViewState::Error` until the user asks again. Results are not reused
/// across requests.
#[derive(Clone)]
pub struct SuggestionsView {
    backend: Arc<dyn RecommendationBackend>,
    cache: QueryCache,
    user_id: String,
    inner: Arc<RwLock<Inner>>,
}

impl SuggestionsView {
    pub fn new(
        backend: Arc<dyn RecommendationBackend>,
        cache: QueryCache,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            cache,
            user_id: user_id.into(),
            inner: Arc::new(RwLock::new(Inner {
                state: ViewState::Idle,
                location: None,
            })),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.inner.read().await.state.clone()
    }

    /// Position used for the most recent request
    pub async fn location(&self) -> Option<Coordinates> {
        self.inner.read().await.location
    }

    /// True once feedback has been recorded against the results on screen
    pub async fn results_stale(&self) -> bool {
        matches!(self.state().await, ViewState::Success(_))
            && self.cache.is_stale(&QueryKey::Suggestions).await
    }

    /// Runs one suggestions request and returns the state it ends in
    pub async fn request_suggestions(&self, geolocator: &dyn Geolocator) -> ViewState {
        let location = match geolocator.current_position().await {
            Ok(location) => location,
            Err(e) => {
                tracing::error!(error = %e, "Error acquiring location");
                return self.set_state(ViewState::Error(e.to_string())).await;
            }
        };

        {
            let mut inner = self.inner.write().await;
            inner.location = Some(location);
            inner.state = ViewState::Pending;
        }

        tracing::info!(location = %location, user_id = %self.user_id, "Requesting suggestions");

        let request = SuggestionRequest::new(location, self.user_id.clone());
        let next = match self.backend.suggestions(request).await {
            Ok(response) => {
                if let Err(e) = self.cache.store(&QueryKey::Suggestions, &response).await {
                    tracing::warn!(error = %e, "Failed to cache suggestions");
                }
                ViewState::Success(response)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching suggestions");
                ViewState::Error(e.to_string())
            }
        };

        self.set_state(next).await
    }

    /// The "Try Again" action
    pub async fn retry(&self, geolocator: &dyn Geolocator) -> ViewState {
        self.request_suggestions(geolocator).await
    }

    /// Records a like/dislike on a place as a 5/1 rating
    pub async fn submit_feedback(
        &self,
        location_id: &str,
        rating: FeedbackRating,
    ) -> AppResult<()> {
        let feedback = FeedbackRequest::new(self.user_id.clone(), location_id, rating);

        self.backend
            .submit_feedback(feedback)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error submitting feedback"))?;

        self.cache.invalidate(&QueryKey::Suggestions).await;
        Ok(())
    }

    /// Narrative paragraphs of the current results, empty unless successful
    pub async fn narrative_paragraphs(&self) -> Vec<String> {
        match &self.inner.read().await.state {
            ViewState::Success(response) => response
                .paragraphs()
                .into_iter()
                .map(|p| p.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    async fn set_state(&self, state: ViewState) -> ViewState {
        self.inner.write().await.state = state.clone();
        state
    }
}
