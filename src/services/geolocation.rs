use crate::{
    error::{AppError, AppResult},
    models::Coordinates,
};

/// Source of the user's current position
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> AppResult<Coordinates>;
}

/// Geolocator that reports a position chosen up front (command line or config)
#[derive(Debug, Clone, Default)]
pub struct FixedLocation {
    position: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }

    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}

#[async_trait::async_trait]
impl Geolocator for FixedLocation {
    async fn current_position(&self) -> AppResult<Coordinates> {
        let position = self.position.ok_or_else(|| {
            AppError::Geolocation(
                "no position available; pass --lat/--lon or set WANDERWISE_DEFAULT_LATITUDE and WANDERWISE_DEFAULT_LONGITUDE"
                    .to_string(),
            )
        })?;
        validate(position)
    }
}

/// Rejects positions outside the valid latitude/longitude ranges
fn validate(position: Coordinates) -> AppResult<Coordinates> {
    if !(-90.0..=90.0).contains(&position.latitude) {
        return Err(AppError::InvalidInput(format!(
            "latitude {} is outside [-90, 90]",
            position.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&position.longitude) {
        return Err(AppError::InvalidInput(format!(
            "longitude {} is outside [-180, 180]",
            position.longitude
        )));
    }
    Ok(position)
}
