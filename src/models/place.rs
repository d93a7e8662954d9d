use serde::{Deserialize, Serialize};

/// Cuisine tags shown on a card before collapsing into "+N"
const VISIBLE_CUISINE_TAGS: usize = 3;

/// A recommended point of interest returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub location_id: String,
    pub name: String,
    /// Distance in kilometres, as sent by the backend
    pub distance: String,
    #[serde(default)]
    pub bearing: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub cuisine: Vec<String>,
    #[serde(default)]
    pub category: String,
}

impl Place {
    /// "350m" below one kilometre, "2.4km" above; unparsable values pass through
    ///
    /// Halves round up ("1.25" is "1.3km"), not to even.
    pub fn display_distance(&self) -> String {
        match self.distance.trim().parse::<f64>() {
            Ok(km) if km < 1.0 => format!("{:.0}m", (km * 1000.0).round()),
            Ok(km) => format!("{:.1}km", (km * 10.0).round() / 10.0),
            Err(_) => self.distance.clone(),
        }
    }

    /// Star rating, or "New" for places without one
    pub fn display_rating(&self) -> String {
        match self.rating {
            Some(rating) if rating > 0.0 => format!("{}", rating),
            _ => "New".to_string(),
        }
    }

    /// One money marker per `$` in the price level; other values shown verbatim
    pub fn display_price_level(&self) -> Option<String> {
        let level = self.price_level.as_deref()?.trim();
        if level.is_empty() {
            return None;
        }
        let count = level.chars().filter(|c| *c == '$').count();
        if count == 0 {
            return Some(level.to_string());
        }
        Some("$".repeat(count))
    }

    /// First few cuisine tags plus a "+N" marker for the rest
    pub fn cuisine_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .cuisine
            .iter()
            .take(VISIBLE_CUISINE_TAGS)
            .cloned()
            .collect();
        if self.cuisine.len() > VISIBLE_CUISINE_TAGS {
            tags.push(format!("+{}", self.cuisine.len() - VISIBLE_CUISINE_TAGS));
        }
        tags
    }
}
