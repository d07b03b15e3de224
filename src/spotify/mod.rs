//! # Spotify Integration Module
//!
//! Thin client for the handful of Spotify Web API endpoints the relay needs. Every
//! call takes the caller's `Authorization` header value and sends it unchanged; the
//! relay never stores, refreshes or inspects tokens.
//!
//! ## Endpoints
//!
//! - `GET /recommendations` - [`SpotifyClient::recommendations`]
//! - `POST /users/{user_id}/playlists` - [`SpotifyClient::create_playlist`]
//! - `POST /users/{user_id}/playlists/{playlist_id}/tracks` - [`SpotifyClient::add_tracks`]
//! - `GET /search` - [`SpotifyClient::search_tracks`]
//!
//! ## Error Classification
//!
//! Responses are mapped onto [`SpotifyError`]:
//! - **401** becomes [`SpotifyError::Unauthorized`] so callers can ask the user to
//!   log in again
//! - any other unexpected status becomes [`SpotifyError::BadStatus`]
//! - a body that does not match the expected shape becomes
//!   [`SpotifyError::MalformedResponse`]
//! - transport failures, including timeouts, become [`SpotifyError::Request`]
//!
//! Each call is attempted exactly once.
//!
//! ## Testing
//!
//! Business logic depends on the [`SpotifyApi`] trait rather than on
//! [`SpotifyClient`] directly, so it can be exercised against a mock.

mod error;
pub mod playlist;
pub mod recommendations;
pub mod search;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

pub use error::SpotifyError;

use crate::types::{AudioTargets, RecommendedTrack, SearchQuery, SeedSelection, TrackSummary};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// The Spotify capabilities used by the playlist generator and the API layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn recommendations(
        &self,
        token: &str,
        seeds: &SeedSelection,
        targets: &AudioTargets,
        limit: Option<u32>,
    ) -> Result<Vec<RecommendedTrack>, SpotifyError>;

    async fn create_playlist(
        &self,
        token: &str,
        user: &str,
        name: &str,
        description: &str,
    ) -> Result<String, SpotifyError>;

    async fn add_tracks(
        &self,
        token: &str,
        user: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), SpotifyError>;

    async fn search_tracks(
        &self,
        token: &str,
        query: &SearchQuery,
    ) -> Result<Vec<TrackSummary>, SpotifyError>;
}

/// HTTP client bound to one Spotify API base url.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: Url,
}

impl SpotifyClient {
    /// Creates a client whose requests are each bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SpotifyError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SpotifyError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SpotifyError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SpotifyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SpotifyError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Classifies the status of `response` and, when it is one of `accepted`,
/// returns the response for further reading.
fn check_status(response: Response, accepted: &[StatusCode]) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(SpotifyError::Unauthorized);
    }
    if !accepted.contains(&status) {
        return Err(SpotifyError::BadStatus(status));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SpotifyError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(SpotifyError::MalformedResponse)
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn recommendations(
        &self,
        token: &str,
        seeds: &SeedSelection,
        targets: &AudioTargets,
        limit: Option<u32>,
    ) -> Result<Vec<RecommendedTrack>, SpotifyError> {
        SpotifyClient::recommendations(self, token, seeds, targets, limit).await
    }

    async fn create_playlist(
        &self,
        token: &str,
        user: &str,
        name: &str,
        description: &str,
    ) -> Result<String, SpotifyError> {
        SpotifyClient::create_playlist(self, token, user, name, description).await
    }

    async fn add_tracks(
        &self,
        token: &str,
        user: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), SpotifyError> {
        SpotifyClient::add_tracks(self, token, user, playlist_id, uris).await
    }

    async fn search_tracks(
        &self,
        token: &str,
        query: &SearchQuery,
    ) -> Result<Vec<TrackSummary>, SpotifyError> {
        SpotifyClient::search_tracks(self, token, query).await
    }
}
