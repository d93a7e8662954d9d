use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Preferences(String),
    Suggestions,
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKey::Preferences(user_id) => write!(f, "preferences:{}", user_id),
            QueryKey::Suggestions => write!(f, "suggestions"),
        }
    }
}

/// A cached read result
#[derive(Debug, Clone)]
struct CacheEntry {
    json: String,
    fetched_at: DateTime<Utc>,
    stale: bool,
}

/// In-memory cache of backend reads, invalidated by writes
///
/// Reads are served only while their entry is fresh. Writes mark the
/// matching key stale so the next read goes back to the backend. Entries are
/// stored as JSON so any serializable response can be cached under a key.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a fresh value from the cache by key
    ///
    /// Returns `None` when the key was never fetched or has been invalidated.
    pub async fn get_from_cache<T: serde::de::DeserializeOwned>(
        &self,
        key: &QueryKey,
    ) -> AppResult<Option<T>> {
        let entries = self.entries.read().await;

        match entries.get(&key.to_string()) {
            Some(entry) if !entry.stale => {
                let data = serde_json::from_str(&entry.json).map_err(|e| {
                    AppError::Internal(format!("Cache deserialization error: {}", e))
                })?;
                tracing::debug!(key = %key, fetched_at = %entry.fetched_at, "Cache hit");
                Ok(Some(data))
            }
            _ => {
                tracing::debug!(key = %key, "Cache miss");
                Ok(None)
            }
        }
    }

    /// Stores a fresh value, replacing whatever the key held
    ///
    /// Concurrent fetches of the same key are not coordinated; the last
    /// response to arrive wins.
    pub async fn store<T: serde::Serialize>(&self, key: &QueryKey, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(format!("Cache serialization error: {}", e)))?;

        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                json,
                fetched_at: Utc::now(),
                stale: false,
            },
        );
        Ok(())
    }

    /// Marks a key stale so the next read refetches it
    pub async fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(&key.to_string()) {
            entry.stale = true;
        }
        tracing::debug!(key = %key, "Query invalidated");
    }

    /// When the key was last fetched, stale or not
    pub async fn fetched_at(&self, key: &QueryKey) -> Option<DateTime<Utc>> {
        let entries = self.entries.read().await;
        entries.get(&key.to_string()).map(|e| e.fetched_at)
    }

    pub async fn is_stale(&self, key: &QueryKey) -> bool {
        let entries = self.entries.read().await;
        entries.get(&key.to_string()).map_or(true, |e| e.stale)
    }
}
