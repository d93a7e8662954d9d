pub mod preferences;
pub mod render;
pub mod suggestions;

pub use preferences::{EditorState, PreferencesEditor};
pub use suggestions::{SuggestionsView, ViewState};
