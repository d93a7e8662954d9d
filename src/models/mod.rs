use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

mod place;
mod preference;

pub use place::Place;
pub use preference::{NewPreference, Preference, PreferenceId, PreferenceType, DEFAULT_SCORE};

/// A latitude/longitude pair reported by a geolocation source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// Body of `POST /suggestions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: String,
}

impl SuggestionRequest {
    pub fn new(location: Coordinates, user_id: impl Into<String>) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            user_id: user_id.into(),
        }
    }
}

/// Response of `POST /suggestions`: narrative text plus the recommended places
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub places: Vec<Place>,
}

impl SuggestionResponse {
    /// Narrative split into paragraphs, blank lines dropped
    pub fn paragraphs(&self) -> Vec<&str> {
        self.suggestion
            .split('\n')
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}

/// Thumbs up / thumbs down on a recommended place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRating {
    Like,
    Dislike,
}

impl FeedbackRating {
    /// Value on the backend's 1-5 rating scale
    pub fn stars(self) -> u8 {
        match self {
            FeedbackRating::Like => 5,
            FeedbackRating::Dislike => 1,
        }
    }
}

impl FromStr for FeedbackRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" | "up" => Ok(FeedbackRating::Like),
            "dislike" | "down" => Ok(FeedbackRating::Dislike),
            other => Err(format!("unknown feedback '{}', expected like or dislike", other)),
        }
    }
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub location_id: String,
    pub rating: u8,
}

impl FeedbackRequest {
    pub fn new(
        user_id: impl Into<String>,
        location_id: impl Into<String>,
        rating: FeedbackRating,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            location_id: location_id.into(),
            rating: rating.stars(),
        }
    }
}
