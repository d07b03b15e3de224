use reqwest::{StatusCode, header::AUTHORIZATION};

use crate::{
    spotify::{SpotifyClient, SpotifyError, check_status, read_json},
    types::{AudioTargets, RecommendationsResponse, RecommendedTrack, SeedSelection},
};

impl SpotifyClient {
    /// Retrieves track recommendations for the given seeds and audio targets.
    ///
    /// Seeds are expected to be already truncated to Spotify's seed budget (see
    /// [`crate::utils::select_seeds`]). Empty seed lists and absent targets are not
    /// sent at all, and `limit` is only included when the caller supplied one.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<RecommendedTrack>)` - recommended tracks in the order Spotify returned them
    /// - `Err(SpotifyError::Unauthorized)` - the token was rejected
    /// - `Err(SpotifyError::BadStatus)` - any other non-200 status
    /// - `Err(SpotifyError::MalformedResponse)` - the body has no `tracks` list
    ///
    /// # Example
    ///
    /// ```ignore
    /// let seeds = utils::select_seeds("t1,t2", "a1,a2,a3,a4");
    /// let tracks = client
    ///     .recommendations(&token, &seeds, &AudioTargets::default(), Some(20))
    ///     .await?;
    /// ```
    pub async fn recommendations(
        &self,
        token: &str,
        seeds: &SeedSelection,
        targets: &AudioTargets,
        limit: Option<u32>,
    ) -> Result<Vec<RecommendedTrack>, SpotifyError> {
        let api_url = self.endpoint(&["recommendations"])?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if !seeds.tracks.is_empty() {
            query.push(("seed_tracks", seeds.tracks.join(",")));
        }
        if !seeds.artists.is_empty() {
            query.push(("seed_artists", seeds.artists.join(",")));
        }
        query.extend(targets.query_pairs());

        tracing::debug!(
            seed_tracks = seeds.tracks.len(),
            seed_artists = seeds.artists.len(),
            "Getting Spotify track recommendations"
        );

        let response = self
            .http
            .get(api_url)
            .header(AUTHORIZATION, token)
            .query(&query)
            .send()
            .await?;

        let response = check_status(response, &[StatusCode::OK])?;
        let json = read_json::<RecommendationsResponse>(response).await?;

        Ok(json.tracks)
    }
}
