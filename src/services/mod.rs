pub mod backend;
pub mod geolocation;
pub mod preference_store;
pub mod request_id;

pub use backend::{HttpBackend, RecommendationBackend};
pub use geolocation::{FixedLocation, Geolocator};
pub use preference_store::PreferenceStore;
