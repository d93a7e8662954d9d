use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Score attached to preferences added from the editor
pub const DEFAULT_SCORE: f64 = 0.7;

pub type PreferenceId = i64;

/// Attribute a preference weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    #[default]
    Cuisine,
    Category,
    PriceLevel,
    Ambiance,
}

impl PreferenceType {
    pub const ALL: [PreferenceType; 4] = [
        PreferenceType::Cuisine,
        PreferenceType::Category,
        PreferenceType::PriceLevel,
        PreferenceType::Ambiance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceType::Cuisine => "cuisine",
            PreferenceType::Category => "category",
            PreferenceType::PriceLevel => "price_level",
            PreferenceType::Ambiance => "ambiance",
        }
    }

    /// Human-readable label for the type selector
    pub fn label(self) -> &'static str {
        match self {
            PreferenceType::Cuisine => "Cuisine",
            PreferenceType::Category => "Category",
            PreferenceType::PriceLevel => "Price Level",
            PreferenceType::Ambiance => "Ambiance",
        }
    }
}

impl Display for PreferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        PreferenceType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown preference type '{}', expected one of cuisine, category, price_level, ambiance",
                    s
                )
            })
    }
}

/// A saved preference record owned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preference {
    pub id: PreferenceId,
    pub preference_type: PreferenceType,
    pub preference_name: String,
    pub score: f64,
}

impl Preference {
    /// Score as a rounded percentage
    pub fn score_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Body of create/update preference requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPreference {
    pub preference_type: PreferenceType,
    pub preference_name: String,
    pub score: f64,
}

impl NewPreference {
    pub fn new(preference_type: PreferenceType, preference_name: impl Into<String>) -> Self {
        Self {
            preference_type,
            preference_name: preference_name.into(),
            score: DEFAULT_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PreferenceType::PriceLevel).unwrap(),
            "\"price_level\""
        );
        assert_eq!(
            serde_json::from_str::<PreferenceType>("\"ambiance\"").unwrap(),
            PreferenceType::Ambiance
        );
    }

    #[test]
    fn test_preference_type_from_str() {
        assert_eq!("Price Level".parse::<PreferenceType>(), Ok(PreferenceType::PriceLevel));
        assert_eq!("price-level".parse::<PreferenceType>(), Ok(PreferenceType::PriceLevel));
        assert_eq!("CUISINE".parse::<PreferenceType>(), Ok(PreferenceType::Cuisine));
        assert!("mood".parse::<PreferenceType>().is_err());
    }

    #[test]
    fn test_preference_deserialization_ignores_user_id() {
        let json = r#"{
            "id": 7,
            "user_id": "123",
            "preference_type": "cuisine",
            "preference_name": "Italian",
            "score": 0.7
        }"#;

        let pref: Preference = serde_json::from_str(json).unwrap();
        assert_eq!(pref.id, 7);
        assert_eq!(pref.preference_type, PreferenceType::Cuisine);
        assert_eq!(pref.preference_name, "Italian");
        assert_eq!(pref.score_percent(), 70);
    }

    #[test]
    fn test_new_preference_uses_default_score() {
        let pref = NewPreference::new(PreferenceType::Ambiance, "Quiet");
        assert_eq!(pref.score, DEFAULT_SCORE);
        assert_eq!(
            serde_json::to_value(&pref).unwrap(),
            serde_json::json!({
                "preference_type": "ambiance",
                "preference_name": "Quiet",
                "score": 0.7
            })
        );
    }
}
