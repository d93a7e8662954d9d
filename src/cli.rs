use clap::{Parser, Subcommand};

use crate::models::{FeedbackRating, PreferenceId, PreferenceType};

/// AI-powered local discovery
#[derive(Debug, Parser)]
#[command(name = "wanderwise", version, about)]
pub struct Cli {
    /// Backend base URL, overrides WANDERWISE_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get suggestions for places near a position
    Suggest {
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
    },
    /// Like or dislike a recommended place
    Feedback {
        location_id: String,
        /// like or dislike
        rating: FeedbackRating,
    },
    /// Manage saved preferences
    #[command(subcommand)]
    Preferences(PreferencesCommand),
}

#[derive(Debug, Subcommand)]
pub enum PreferencesCommand {
    /// List saved preferences
    List,
    /// Add a preference with the default score
    Add {
        /// cuisine, category, price_level or ambiance
        preference_type: PreferenceType,
        name: String,
    },
    /// Remove a preference by id
    Remove { id: PreferenceId },
    /// Replace a preference's type, name and score
    SetScore {
        id: PreferenceId,
        preference_type: PreferenceType,
        name: String,
        score: f64,
    },
}
