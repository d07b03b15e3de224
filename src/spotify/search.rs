use reqwest::{StatusCode, header::AUTHORIZATION};

use crate::{
    spotify::{SpotifyClient, SpotifyError, check_status, read_json},
    types::{SearchQuery, SearchResponse, TrackSummary},
};

impl SpotifyClient {
    /// Searches Spotify's catalog for tracks and flattens each hit into a
    /// [`TrackSummary`].
    ///
    /// Only the first album image and the first album artist of each hit are
    /// kept. Hits without images or artists get empty strings for those fields.
    pub async fn search_tracks(
        &self,
        token: &str,
        query: &SearchQuery,
    ) -> Result<Vec<TrackSummary>, SpotifyError> {
        let api_url = self.endpoint(&["search"])?;

        let mut params: Vec<(&str, String)> =
            vec![("q", query.q.clone()), ("type", "track".to_string())];
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }

        tracing::debug!(q = %query.q, "Searching Spotify tracks");

        let response = self
            .http
            .get(api_url)
            .header(AUTHORIZATION, token)
            .query(&params)
            .send()
            .await?;

        let response = check_status(response, &[StatusCode::OK])?;
        let json = read_json::<SearchResponse>(response).await?;

        Ok(json
            .tracks
            .items
            .into_iter()
            .map(TrackSummary::from)
            .collect())
    }
}
