use crate::types::{RecommendedTrack, SeedSelection};

/// Maximum number of seeds (tracks and artists combined) Spotify accepts.
pub const MAX_SEEDS: usize = 5;

pub const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Splits a comma-delimited ID list, trimming whitespace and dropping empty entries.
pub fn split_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncates seed artists to whatever budget the seed tracks leave over.
pub fn truncate_seed_artists(track_count: usize, mut artists: Vec<String>) -> Vec<String> {
    artists.truncate(MAX_SEEDS.saturating_sub(track_count));
    artists
}

pub fn select_seeds(tracks: &str, artists: &str) -> SeedSelection {
    let tracks = split_ids(tracks);
    let artists = truncate_seed_artists(tracks.len(), split_ids(artists));
    SeedSelection { tracks, artists }
}

/// Seed tracks first, in the order given, then recommendations in upstream order.
pub fn build_track_uris(seed_tracks: &[String], recommended: &[RecommendedTrack]) -> Vec<String> {
    seed_tracks
        .iter()
        .map(|id| format!("{TRACK_URI_PREFIX}{id}"))
        .chain(recommended.iter().map(|track| track.uri.clone()))
        .collect()
}

/// The credential carried by an `Authorization` header value.
///
/// The value is opaque and forwarded upstream exactly as received, scheme
/// included. Blank values yield `None`.
pub fn credential(header_value: &str) -> Option<String> {
    if header_value.trim().is_empty() {
        None
    } else {
        Some(header_value.to_string())
    }
}
