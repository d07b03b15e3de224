use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
};

use crate::{
    api::{ApiError, AppState, authorization},
    types::{SearchQuery, TracksResponse},
};

/// `GET /tracks?q=...`
///
/// Relays a track search to Spotify and returns a flattened view of the hits.
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<TracksResponse>, ApiError> {
    let token = authorization(&headers).ok_or(ApiError::MissingAuth)?;

    let Query(query) = query.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    if query.q.trim().is_empty() {
        return Err(ApiError::MalformedRequest(
            "Query parameter `q` must not be empty".to_string(),
        ));
    }

    let tracks = state
        .spotify
        .search_tracks(&token, &query)
        .await
        .map_err(ApiError::Search)?;

    Ok(Json(TracksResponse { tracks }))
}
