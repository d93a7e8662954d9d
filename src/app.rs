use std::sync::Arc;

use crate::{
    cache::QueryCache,
    cli::{Command, PreferencesCommand},
    config::Config,
    models::NewPreference,
    services::{FixedLocation, HttpBackend, PreferenceStore, RecommendationBackend},
    views::{render, PreferencesEditor, SuggestionsView, ViewState},
};

/// Shared client state: one backend, one query cache, both views
#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub cache: QueryCache,
    pub store: PreferenceStore,
    pub suggestions: SuggestionsView,
    pub preferences: PreferencesEditor,
}

impl App {
    /// Builds the app against the configured HTTP backend
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(HttpBackend::new(config.api_url.clone()));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Config, backend: Arc<dyn RecommendationBackend>) -> Self {
        let cache = QueryCache::new();
        let store = PreferenceStore::new(backend.clone());
        let suggestions = SuggestionsView::new(backend, cache.clone(), config.user_id.clone());
        let preferences = PreferencesEditor::new(store.clone(), cache.clone(), config.user_id.clone());

        Self {
            config,
            cache,
            store,
            suggestions,
            preferences,
        }
    }

    /// Runs one command and returns the text to print
    ///
    /// A failed suggestions request is a rendered state, not an error; every
    /// other failure is returned.
    pub async fn run(&self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Suggest { lat, lon } => {
                let position = match (lat, lon) {
                    (Some(latitude), Some(longitude)) => FixedLocation::at(latitude, longitude),
                    _ => FixedLocation::new(self.config.default_location()),
                };
                let state = self.suggestions.request_suggestions(&position).await;
                let stale = self.suggestions.results_stale().await;
                let out = render::render_suggestions(&state, stale);
                match state {
                    ViewState::Error(_) => Err(anyhow::anyhow!("{}", out.trim_end())),
                    _ => Ok(out),
                }
            }
            Command::Feedback {
                location_id,
                rating,
            } => {
                self.suggestions.submit_feedback(&location_id, rating).await?;
                Ok(format!(
                    "Recorded {} stars for {}\n",
                    rating.stars(),
                    location_id
                ))
            }
            Command::Preferences(command) => self.run_preferences(command).await,
        }
    }

    /// Opens the editor for one command and closes it again, whatever the outcome
    async fn run_preferences(&self, command: PreferencesCommand) -> anyhow::Result<String> {
        self.preferences.open().await;
        let result = self.preferences_output(command).await;
        self.preferences.close().await;
        result
    }

    async fn preferences_output(&self, command: PreferencesCommand) -> anyhow::Result<String> {
        let editor = &self.preferences;

        let message = match command {
            PreferencesCommand::List => None,
            PreferencesCommand::Add {
                preference_type,
                name,
            } => {
                editor.set_draft_type(preference_type).await;
                editor.set_draft_name(name).await;
                match editor.add_preference().await? {
                    Some(created) => Some(format!(
                        "Added {} '{}' (#{})",
                        created.preference_type, created.preference_name, created.id
                    )),
                    None => anyhow::bail!("preference name cannot be empty"),
                }
            }
            PreferencesCommand::Remove { id } => {
                editor.delete_preference(id).await?;
                Some(format!("Removed preference #{}", id))
            }
            PreferencesCommand::SetScore {
                id,
                preference_type,
                name,
                score,
            } => {
                if !(0.0..=1.0).contains(&score) {
                    anyhow::bail!("score {} is outside [0, 1]", score);
                }
                let change = NewPreference {
                    preference_type,
                    preference_name: name,
                    score,
                };
                let updated = editor.update_preference(id, change).await?;
                Some(format!(
                    "Updated #{} to {}%",
                    updated.id,
                    updated.score_percent()
                ))
            }
        };

        let preferences = editor.preferences().await?;
        let mut out = String::new();
        if let Some(message) = message {
            out.push_str(&message);
            out.push_str("\n\n");
        }
        out.push_str(&render::render_preferences(&editor.state().await, &preferences));
        Ok(out)
    }
}
