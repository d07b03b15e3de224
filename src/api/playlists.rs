use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};

use crate::{
    api::{ApiError, AppState, authorization},
    generator::PlaylistGeneration,
    types::{GenerationRequest, GenerationResponse},
    utils,
};

pub const SUCCESS_MESSAGE: &str = "Successfully created playlist";

/// `POST /playlists`
///
/// The credential is checked before the body is even looked at, so a request
/// without one is rejected with 401 regardless of its payload.
pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let generation = PlaylistGeneration::start(authorization(&headers))?;

    let Json(request) = body.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    validate(&request).map_err(ApiError::MalformedRequest)?;

    let playlist = generation.run(state.spotify.as_ref(), &request).await?;

    tracing::info!(
        playlist_id = %playlist.playlist_id,
        tracks = playlist.tracks_added,
        "Playlist generated"
    );

    Ok(Json(GenerationResponse {
        message: SUCCESS_MESSAGE.to_string(),
        playlist_id: playlist.playlist_id,
        tracks_added: playlist.tracks_added,
    }))
}

/// Range and seed checks that serde cannot express.
pub fn validate(request: &GenerationRequest) -> Result<(), String> {
    if request.user.trim().is_empty() {
        return Err("Field `user` must not be empty".to_string());
    }

    let seed_tracks = utils::split_ids(&request.tracks).len();
    if seed_tracks > utils::MAX_SEEDS {
        return Err(format!(
            "At most {} seed tracks are allowed, got {}",
            utils::MAX_SEEDS,
            seed_tracks
        ));
    }
    if utils::select_seeds(&request.tracks, &request.artists).is_empty() {
        return Err("At least one seed track or artist is required".to_string());
    }

    if let Some(limit) = request.limit {
        if !(1..=100).contains(&limit) {
            return Err(format!("Field `limit` must be between 1 and 100, got {limit}"));
        }
    }

    let targets = &request.targets;
    for (field, value) in [
        ("danceability", targets.danceability),
        ("energy", targets.energy),
        ("liveness", targets.liveness),
        ("valence", targets.valence),
    ] {
        if let Some(value) = value {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("Field `{field}` must be between 0 and 1, got {value}"));
            }
        }
    }
    if let Some(loudness) = targets.loudness {
        if !loudness.is_finite() {
            return Err("Field `loudness` must be a finite number".to_string());
        }
    }
    if let Some(mode) = targets.mode {
        if mode > 1 {
            return Err(format!("Field `mode` must be 0 or 1, got {mode}"));
        }
    }
    if let Some(popularity) = targets.popularity {
        if popularity > 100 {
            return Err(format!(
                "Field `popularity` must be between 0 and 100, got {popularity}"
            ));
        }
    }

    Ok(())
}
