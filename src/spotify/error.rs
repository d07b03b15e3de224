use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a single Spotify Web API call.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Spotify rejected the bearer token (HTTP 401).
    #[error("Unauthorized, bad access token")]
    Unauthorized,

    #[error("Bad status code from Spotify API: {0}")]
    BadStatus(StatusCode),

    #[error("Could not parse Spotify API response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Could not reach Spotify API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid Spotify API url: {0}")]
    InvalidUrl(String),
}

impl SpotifyError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SpotifyError::Unauthorized)
    }
}
