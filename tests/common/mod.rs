#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    response::IntoResponse,
};
use playlist_relay::{
    api::{self, AppState},
    spotify::SpotifyClient,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Recommendations,
    CreatePlaylist,
    AddTracks,
    Search,
    Other,
}

impl Endpoint {
    fn classify(method: &Method, path: &str) -> Self {
        match (method, path) {
            (&Method::GET, "/v1/recommendations") => Endpoint::Recommendations,
            (&Method::GET, "/v1/search") => Endpoint::Search,
            (&Method::POST, p) if p.starts_with("/v1/users/") && p.ends_with("/tracks") => {
                Endpoint::AddTracks
            }
            (&Method::POST, p) if p.starts_with("/v1/users/") && p.ends_with("/playlists") => {
                Endpoint::CreatePlaylist
            }
            _ => Endpoint::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct FakeState {
    responses: Arc<HashMap<Endpoint, (StatusCode, String)>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// A stand-in for the Spotify Web API that records every call it receives.
pub struct FakeSpotify {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub fn recommendations_body(uris: &[&str]) -> String {
    let tracks: Vec<Value> = uris
        .iter()
        .map(|uri| json!({ "name": format!("Song {uri}"), "uri": uri, "popularity": 50 }))
        .collect();
    json!({ "tracks": tracks, "seeds": [] }).to_string()
}

pub struct FakeSpotifyBuilder {
    responses: HashMap<Endpoint, (StatusCode, String)>,
}

impl FakeSpotifyBuilder {
    pub fn respond(mut self, endpoint: Endpoint, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses.insert(endpoint, (status, body.into()));
        self
    }

    pub async fn start(self) -> FakeSpotify {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            responses: Arc::new(self.responses),
            calls: Arc::clone(&calls),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let addr = spawn(app).await;

        FakeSpotify {
            base_url: format!("http://{addr}/v1"),
            calls,
        }
    }
}

impl FakeSpotify {
    /// Successful responses for every endpoint.
    pub fn builder() -> FakeSpotifyBuilder {
        let mut responses = HashMap::new();
        responses.insert(
            Endpoint::Recommendations,
            (StatusCode::OK, recommendations_body(&["spotify:track:r1", "spotify:track:r2"])),
        );
        responses.insert(
            Endpoint::CreatePlaylist,
            (StatusCode::CREATED, json!({ "id": "pl-1", "name": "Mix" }).to_string()),
        );
        responses.insert(
            Endpoint::AddTracks,
            (StatusCode::CREATED, json!({ "snapshot_id": "snap" }).to_string()),
        );
        responses.insert(
            Endpoint::Search,
            (StatusCode::OK, json!({ "tracks": { "items": [] } }).to_string()),
        );
        FakeSpotifyBuilder { responses }
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }
}

async fn handle(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let endpoint = Endpoint::classify(&method, uri.path());

    state.calls.lock().unwrap().push(RecordedCall {
        endpoint,
        method,
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.responses.get(&endpoint) {
        Some((status, body)) => (*status, body.clone()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts the relay against `spotify` and returns its base url.
pub async fn start_relay(spotify: &FakeSpotify) -> String {
    let app = api::router(AppState::new(spotify.client()));
    let addr = spawn(app).await;
    format!("http://{addr}")
}
