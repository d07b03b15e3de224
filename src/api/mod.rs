//! # API Module
//!
//! HTTP endpoints exposed to the front-end.
//!
//! ## Endpoints
//!
//! - `GET /status` - [`status`], liveness check
//! - `POST /playlists` - [`generate`], generates a playlist from seeds and audio targets
//! - `GET /tracks` - [`search`], track search used to pick seeds
//!
//! Both Spotify-backed endpoints require an `Authorization` header, normally
//! `Bearer <token>`. The value belongs to the end user and is forwarded to
//! Spotify byte for byte.
//!
//! ## Errors
//!
//! Failures are rendered by [`ApiError`] as `{"error": "<reason>"}` with status
//! 401 when the caller has to (re-)authenticate and 400 otherwise.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let client = SpotifyClient::new(&config::spotify_apiurl(), config::spotify_api_timeout())?;
//! let app = api::router(AppState::new(client));
//! ```

mod error;
mod health;
mod playlists;
mod tracks;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderMap, header::AUTHORIZATION},
    routing::{get, post},
};

pub use error::ApiError;
pub use health::{STATUS_MESSAGE, status};
pub use playlists::{SUCCESS_MESSAGE, generate, validate};
pub use tracks::search;

use crate::{spotify::SpotifyApi, utils};

/// State shared by all handlers. Holds nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub spotify: Arc<dyn SpotifyApi>,
}

impl AppState {
    pub fn new(spotify: impl SpotifyApi + 'static) -> Self {
        Self {
            spotify: Arc::new(spotify),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/playlists", post(generate))
        .route("/tracks", get(search))
        .with_state(state)
}

/// The raw `Authorization` header value, if one was supplied.
fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(utils::credential)
}
