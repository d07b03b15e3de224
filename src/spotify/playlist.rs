use reqwest::{StatusCode, header::AUTHORIZATION};

use crate::{
    spotify::{SpotifyClient, SpotifyError, check_status, read_json},
    types::{AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse},
};

/// Maximum number of track URIs Spotify accepts in a single add-tracks request.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

impl SpotifyClient {
    /// Creates a playlist for `user` and returns its Spotify id.
    ///
    /// Spotify answers with either 200 or 201 depending on the API version; both
    /// are accepted. Only the `id` of the response is kept.
    pub async fn create_playlist(
        &self,
        token: &str,
        user: &str,
        name: &str,
        description: &str,
    ) -> Result<String, SpotifyError> {
        let api_url = self.endpoint(&["users", user, "playlists"])?;
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
        };

        tracing::debug!(%api_url, "Creating Spotify playlist");

        let response = self
            .http
            .post(api_url)
            .header(AUTHORIZATION, token)
            .json(&body)
            .send()
            .await?;

        let response = check_status(response, &[StatusCode::OK, StatusCode::CREATED])?;
        let json = read_json::<CreatePlaylistResponse>(response).await?;

        Ok(json.id)
    }

    /// Appends `uris` to the playlist, preserving their order.
    ///
    /// The list is sent in chunks of [`MAX_TRACKS_PER_REQUEST`]. Each chunk must be
    /// answered with 201; the first failing chunk aborts the operation and any
    /// chunks already added stay on the playlist. Response bodies are ignored.
    pub async fn add_tracks(
        &self,
        token: &str,
        user: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), SpotifyError> {
        let api_url = self.endpoint(&["users", user, "playlists", playlist_id, "tracks"])?;

        tracing::debug!(%api_url, tracks = uris.len(), "Adding tracks to Spotify playlist");

        for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };

            let response = self
                .http
                .post(api_url.clone())
                .header(AUTHORIZATION, token)
                .json(&body)
                .send()
                .await?;

            check_status(response, &[StatusCode::CREATED])?;
        }

        Ok(())
    }
}
