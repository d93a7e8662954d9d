//! HTTP/JSON backend client
//!
//! Talks to the recommendation service over plain REST. Each call carries a
//! fresh `x-request-id` so client logs can be matched with backend logs.
//! Non-2xx responses become `AppError::Api`; nothing is retried.

use crate::{
    error::{AppError, AppResult},
    models::{
        FeedbackRequest, NewPreference, Preference, PreferenceId, SuggestionRequest,
        SuggestionResponse,
    },
    services::{backend::RecommendationBackend, request_id::RequestId},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    api_url: String,
}

impl HttpBackend {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), api_url)
    }

    pub fn with_client(http_client: HttpClient, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn preferences_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/preferences", self.api_url, user_id)
    }

    fn preference_url(&self, user_id: &str, preference_id: PreferenceId) -> String {
        format!("{}/{}", self.preferences_url(user_id), preference_id)
    }

    /// Sends a request and returns the response when it is 2xx
    async fn send(
        &self,
        context: &str,
        request: reqwest::RequestBuilder,
    ) -> AppResult<reqwest::Response> {
        let request_id = RequestId::new();
        let response = request_id.attach(request).send().await.map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Failed to {}", context);
            AppError::HttpClient(e)
        })?;

        if !response.status().is_success() {
            let err = AppError::from_response(context, response).await;
            tracing::error!(request_id = %request_id, error = %err, "Failed to {}", context);
            return Err(err);
        }

        tracing::debug!(
            request_id = %request_id,
            status = %response.status(),
            "Backend call succeeded: {}",
            context
        );

        Ok(response)
    }

    /// Parses a JSON body, logging the raw text when it does not match
    async fn parse<T: DeserializeOwned>(
        &self,
        context: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, response = %text, "Failed to deserialize backend response");
            AppError::Internal(format!("Failed to parse {} response: {}", context, e))
        })
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn list_preferences(&self, user_id: &str) -> AppResult<Vec<Preference>> {
        let context = "fetch preferences";
        let response = self
            .send(context, self.http_client.get(self.preferences_url(user_id)))
            .await?;
        let preferences: Vec<Preference> = self.parse(context, response).await?;

        tracing::info!(
            user_id = %user_id,
            count = preferences.len(),
            backend = self.name(),
            "Preferences fetched"
        );

        Ok(preferences)
    }

    async fn create_preference(
        &self,
        user_id: &str,
        preference: NewPreference,
    ) -> AppResult<Preference> {
        let context = "add preference";
        let response = self
            .send(
                context,
                self.http_client
                    .post(self.preferences_url(user_id))
                    .json(&preference),
            )
            .await?;
        let created: Preference = self.parse(context, response).await?;

        tracing::info!(
            user_id = %user_id,
            preference_id = created.id,
            preference_type = %created.preference_type,
            "Preference added"
        );

        Ok(created)
    }

    async fn update_preference(
        &self,
        user_id: &str,
        preference_id: PreferenceId,
        preference: NewPreference,
    ) -> AppResult<Preference> {
        let context = "update preference";
        let response = self
            .send(
                context,
                self.http_client
                    .put(self.preference_url(user_id, preference_id))
                    .json(&preference),
            )
            .await?;
        let updated: Preference = self.parse(context, response).await?;

        tracing::info!(user_id = %user_id, preference_id, "Preference updated");

        Ok(updated)
    }

    async fn delete_preference(
        &self,
        user_id: &str,
        preference_id: PreferenceId,
    ) -> AppResult<()> {
        self.send(
            "delete preference",
            self.http_client
                .delete(self.preference_url(user_id, preference_id)),
        )
        .await?;

        tracing::info!(user_id = %user_id, preference_id, "Preference deleted");

        Ok(())
    }

    async fn suggestions(&self, request: SuggestionRequest) -> AppResult<SuggestionResponse> {
        let context = "fetch suggestions";
        let url = format!("{}/suggestions", self.api_url);
        let response = self
            .send(context, self.http_client.post(url).json(&request))
            .await?;
        let suggestions: SuggestionResponse = self.parse(context, response).await?;

        tracing::info!(
            latitude = request.latitude,
            longitude = request.longitude,
            places = suggestions.places.len(),
            "Suggestions fetched"
        );

        Ok(suggestions)
    }

    async fn submit_feedback(&self, feedback: FeedbackRequest) -> AppResult<()> {
        let url = format!("{}/feedback", self.api_url);
        self.send(
            "submit feedback",
            self.http_client.post(url).json(&feedback),
        )
        .await?;

        tracing::info!(
            location_id = %feedback.location_id,
            rating = feedback.rating,
            "Feedback submitted"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
