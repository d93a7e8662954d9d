//! Plain-text rendering of the view states for the terminal.

use crate::models::{Place, Preference, PreferenceType};
use crate::views::{EditorState, ViewState};

/// Renders whichever suggestions state is current
pub fn render_suggestions(state: &ViewState, stale: bool) -> String {
    let mut out = String::new();

    match state {
        ViewState::Idle => {
            out.push_str("Discover Amazing Places\n");
            out.push_str(
                "Get personalized recommendations for restaurants, cafes, and hidden gems based on your location and preferences.\n",
            );
            out.push_str("Run `wanderwise suggest` to get your suggestions.\n");
        }
        ViewState::Pending => {
            out.push_str("Analyzing your location and preferences...\n");
            out.push_str("This usually takes just a few seconds\n");
        }
        ViewState::Error(message) => {
            out.push_str("Oops! Something went wrong\n");
            out.push_str(&format!("{}\n", message));
            out.push_str("Try again with `wanderwise suggest`.\n");
        }
        ViewState::Success(response) => {
            let paragraphs = response.paragraphs();
            if !paragraphs.is_empty() {
                out.push_str("Your Personal Recommendations\n\n");
                for paragraph in paragraphs {
                    out.push_str(&format!("{}\n\n", paragraph.trim()));
                }
            }

            if !response.places.is_empty() {
                out.push_str("Recommended Places\n\n");
                for place in &response.places {
                    out.push_str(&render_place(place));
                    out.push('\n');
                }
            }

            if stale {
                out.push_str("Feedback recorded; run again for updated suggestions.\n");
            }
        }
    }

    out
}

/// One place card
pub fn render_place(place: &Place) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", place.name, place.display_distance()));
    if !place.address.is_empty() {
        out.push_str(&format!("  {}\n", place.address));
    }

    let mut line = format!("  * {}", place.display_rating());
    if place.reviews > 0 {
        line.push_str(&format!(" ({} reviews)", place.reviews));
    }
    if let Some(price) = place.display_price_level() {
        line.push_str(&format!("  {}", price));
    }
    out.push_str(&line);
    out.push('\n');

    let tags = place.cuisine_tags();
    if !tags.is_empty() {
        out.push_str(&format!("  [{}]\n", tags.join("] [")));
    }
    if !place.category.is_empty() {
        out.push_str(&format!("  {}\n", place.category));
    }
    out.push_str(&format!("  id: {}\n", place.location_id));

    out
}

/// The preferences modal: list, or the empty-state hint
pub fn render_preferences(state: &EditorState, preferences: &[Preference]) -> String {
    let mut out = String::from("Your Preferences\n\n");

    if state.loading {
        out.push_str("Loading preferences...\n");
        return out;
    }

    if preferences.is_empty() {
        out.push_str("No preferences yet. Add some to get better recommendations!\n");
    } else {
        for pref in preferences {
            out.push_str(&format!(
                "#{:<5} {:<12} {:<24} {:>3}%\n",
                pref.id,
                pref.preference_type.as_str(),
                pref.preference_name,
                pref.score_percent()
            ));
        }
    }

    let types: Vec<&str> = PreferenceType::ALL.iter().map(|t| t.label()).collect();
    out.push_str(&format!("\nTypes: {}\n", types.join(", ")));

    out
}
