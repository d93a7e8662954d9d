use reqwest::StatusCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Geolocation unavailable: {0}")]
    Geolocation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds an `Api` error from a non-success response, consuming its body
    pub async fn from_response(context: &str, response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("Failed to {}", context)
        } else {
            format!("Failed to {}: {}", context, body)
        };
        AppError::Api { status, message }
    }

    /// HTTP status for backend rejections, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status(),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
