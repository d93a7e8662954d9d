use serde::Deserialize;

use crate::models::Coordinates;

/// Client configuration loaded from `WANDERWISE_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the recommendation backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User id sent with every request
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Fixed location used when no coordinates are given
    #[serde(default)]
    pub default_latitude: Option<f64>,

    #[serde(default)]
    pub default_longitude: Option<f64>,

    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_user_id() -> String {
    "123".to_string()
}

fn default_log() -> String {
    "wanderwise=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_id: default_user_id(),
            default_latitude: None,
            default_longitude: None,
            log: default_log(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = envy::prefixed("WANDERWISE_")
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// The configured fixed location, when both halves are set
    pub fn default_location(&self) -> Option<Coordinates> {
        match (self.default_latitude, self.default_longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.user_id, "123");
        assert!(config.default_location().is_none());
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_vars(vars(&[
            ("WANDERWISE_API_URL", "https://api.example.com/"),
            ("WANDERWISE_USER_ID", "alice"),
            ("WANDERWISE_DEFAULT_LATITUDE", "51.5"),
            ("WANDERWISE_DEFAULT_LONGITUDE", "-0.12"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.user_id, "alice");
        assert_eq!(
            config.default_location(),
            Some(Coordinates {
                latitude: 51.5,
                longitude: -0.12
            })
        );
    }

    #[test]
    fn test_half_location_is_ignored() {
        let config =
            Config::from_vars(vars(&[("WANDERWISE_DEFAULT_LATITUDE", "10.0")])).unwrap();
        assert!(config.default_location().is_none());
    }

    #[test]
    fn test_invalid_number_fails() {
        let result = Config::from_vars(vars(&[("WANDERWISE_DEFAULT_LATITUDE", "north")]));
        assert!(result.is_err());
    }
}
