use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    generator::{GenerationError, GenerationStep},
    spotify::SpotifyError,
    types::ErrorResponse,
};

/// Failure of an inbound request, rendered as `{"error": <reason>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No authorization header provided")]
    MissingAuth,

    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Could not get tracks: {0}")]
    Search(#[source] SpotifyError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let unauthorized = match self {
            ApiError::MissingAuth => true,
            ApiError::MalformedRequest(_) => false,
            ApiError::Generation(e) => e.is_unauthorized(),
            ApiError::Search(e) => e.is_unauthorized(),
        };

        if unauthorized {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    /// Short reason shown to the caller. Upstream details stay in the logs.
    pub fn reason(&self) -> String {
        match self {
            ApiError::MissingAuth | ApiError::Generation(GenerationError::MissingAuth) => {
                "No authorization header provided".to_string()
            }
            ApiError::MalformedRequest(reason) => reason.clone(),
            ApiError::Generation(e) if e.is_unauthorized() => {
                SpotifyError::Unauthorized.to_string()
            }
            ApiError::Search(SpotifyError::Unauthorized) => SpotifyError::Unauthorized.to_string(),
            ApiError::Generation(e) => match e.step() {
                None => "No authorization header provided".to_string(),
                Some(GenerationStep::Recommendations) => {
                    "Could not get recommendations".to_string()
                }
                Some(GenerationStep::Creation) => "Could not create playlist".to_string(),
                Some(GenerationStep::AddTracks) => "Could not add tracks to playlist".to_string(),
            },
            ApiError::Search(_) => "Could not get tracks".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "Request failed");

        (
            status,
            Json(ErrorResponse {
                error: self.reason(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_auth_is_unauthorized() {
        assert_eq!(ApiError::MissingAuth.status(), StatusCode::UNAUTHORIZED);
        let err = ApiError::from(GenerationError::MissingAuth);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.reason(), "No authorization header provided");
    }

    #[test]
    fn upstream_unauthorized_is_unauthorized_at_every_step() {
        for err in [
            GenerationError::Recommendations(SpotifyError::Unauthorized),
            GenerationError::Creation(SpotifyError::Unauthorized),
            GenerationError::AddTracks(SpotifyError::Unauthorized),
        ] {
            let err = ApiError::from(err);
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(err.reason(), "Unauthorized, bad access token");
        }
    }

    #[test]
    fn other_failures_are_bad_requests() {
        let err = ApiError::from(GenerationError::AddTracks(SpotifyError::BadStatus(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.reason(), "Could not add tracks to playlist");

        let err = ApiError::MalformedRequest("Missing field `user`".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.reason(), "Missing field `user`");

        let err = ApiError::from(GenerationError::Halted(GenerationStep::Creation));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.reason(), "Could not create playlist");

        let err = ApiError::Search(SpotifyError::BadStatus(StatusCode::BAD_GATEWAY));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.reason(), "Could not get tracks");
    }
}
