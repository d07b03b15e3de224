use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub user: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-delimited seed track IDs.
    #[serde(default)]
    pub tracks: String,
    /// Comma-delimited seed artist IDs.
    #[serde(default)]
    pub artists: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(flatten)]
    pub targets: AudioTargets,
}

/// Tunable audio-feature targets forwarded to the recommendations endpoint.
///
/// Every field is independently present or absent. Absent fields are never
/// sent upstream, so Spotify applies its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTargets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loudness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
}

impl AudioTargets {
    /// Query parameters for the present targets, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.danceability {
            pairs.push(("target_danceability", v.to_string()));
        }
        if let Some(v) = self.energy {
            pairs.push(("target_energy", v.to_string()));
        }
        if let Some(v) = self.liveness {
            pairs.push(("target_liveness", v.to_string()));
        }
        if let Some(v) = self.loudness {
            pairs.push(("target_loudness", v.to_string()));
        }
        if let Some(v) = self.mode {
            pairs.push(("target_mode", v.to_string()));
        }
        if let Some(v) = self.popularity {
            pairs.push(("target_popularity", v.to_string()));
        }
        if let Some(v) = self.valence {
            pairs.push(("target_valence", v.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSelection {
    pub tracks: Vec<String>,
    pub artists: Vec<String>,
}

impl SeedSelection {
    pub fn len(&self) -> usize {
        self.tracks.len() + self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<RecommendedTrack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedTrack {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<SearchTrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrackItem {
    pub id: String,
    pub name: String,
    pub album: SearchAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAlbum {
    #[serde(default)]
    pub artists: Vec<SearchArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtist {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub name: String,
    pub image_url: String,
    pub track_id: String,
    pub artist_id: String,
}

impl From<SearchTrackItem> for TrackSummary {
    fn from(item: SearchTrackItem) -> Self {
        TrackSummary {
            name: item.name,
            image_url: item
                .album
                .images
                .into_iter()
                .next()
                .map(|i| i.url)
                .unwrap_or_default(),
            track_id: item.id,
            artist_id: item
                .album
                .artists
                .into_iter()
                .next()
                .map(|a| a.id)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksResponse {
    pub tracks: Vec<TrackSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlaylist {
    pub playlist_id: String,
    pub tracks_added: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub message: String,
    pub playlist_id: String,
    pub tracks_added: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
