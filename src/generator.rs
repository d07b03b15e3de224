//! Playlist generation workflow.
//!
//! A generation runs through four states:
//!
//! ```text
//! Idle -> RecommendationsFetched -> PlaylistCreated -> TracksAdded
//! ```
//!
//! Any failing step moves the generation to the terminal `Failed` state and
//! returns a [`GenerationError`] naming the step. No step is retried and nothing
//! is rolled back: when adding tracks fails, the playlist created in the
//! previous step stays on the user's account, empty.

use std::fmt;

use thiserror::Error;

use crate::{
    spotify::{SpotifyApi, SpotifyError},
    types::{GeneratedPlaylist, GenerationRequest, RecommendedTrack},
    utils,
};

/// The upstream call a generation was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    Recommendations,
    Creation,
    AddTracks,
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStep::Recommendations => write!(f, "recommendations"),
            GenerationStep::Creation => write!(f, "playlist creation"),
            GenerationStep::AddTracks => write!(f, "adding tracks"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No authorization header provided")]
    MissingAuth,

    #[error("Could not get recommendations: {0}")]
    Recommendations(#[source] SpotifyError),

    #[error("Could not create playlist: {0}")]
    Creation(#[source] SpotifyError),

    #[error("Could not add tracks to playlist: {0}")]
    AddTracks(#[source] SpotifyError),

    /// The generation already failed earlier and is not resumed.
    #[error("Generation already failed at {0}")]
    Halted(GenerationStep),
}

impl GenerationError {
    /// The upstream failure behind this error, if any.
    pub fn upstream(&self) -> Option<&SpotifyError> {
        match self {
            GenerationError::MissingAuth | GenerationError::Halted(_) => None,
            GenerationError::Recommendations(e)
            | GenerationError::Creation(e)
            | GenerationError::AddTracks(e) => Some(e),
        }
    }

    /// The step that failed. `None` when no step was attempted.
    pub fn step(&self) -> Option<GenerationStep> {
        match self {
            GenerationError::MissingAuth => None,
            GenerationError::Recommendations(_) => Some(GenerationStep::Recommendations),
            GenerationError::Creation(_) => Some(GenerationStep::Creation),
            GenerationError::AddTracks(_) => Some(GenerationStep::AddTracks),
            GenerationError::Halted(step) => Some(*step),
        }
    }

    /// True when the caller should re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            GenerationError::MissingAuth => true,
            _ => self.upstream().is_some_and(SpotifyError::is_unauthorized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    RecommendationsFetched {
        recommendations: Vec<RecommendedTrack>,
    },
    PlaylistCreated {
        playlist_id: String,
        recommendations: Vec<RecommendedTrack>,
    },
    TracksAdded {
        playlist_id: String,
        tracks_added: usize,
    },
    /// Terminal. `playlist_id` is set when a playlist was created before the failure.
    Failed {
        step: GenerationStep,
        playlist_id: Option<String>,
    },
}

impl GenerationState {
    fn name(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::RecommendationsFetched { .. } => "recommendations_fetched",
            GenerationState::PlaylistCreated { .. } => "playlist_created",
            GenerationState::TracksAdded { .. } => "tracks_added",
            GenerationState::Failed { .. } => "failed",
        }
    }
}

/// One playlist generation on behalf of one caller.
#[derive(Debug)]
pub struct PlaylistGeneration {
    token: String,
    state: GenerationState,
}

impl PlaylistGeneration {
    /// Starts a generation in the `Idle` state.
    ///
    /// Fails with [`GenerationError::MissingAuth`] when no credential was supplied,
    /// before anything is sent upstream.
    pub fn start(token: Option<String>) -> Result<Self, GenerationError> {
        match token {
            Some(token) if !token.is_empty() => Ok(Self {
                token,
                state: GenerationState::Idle,
            }),
            _ => Err(GenerationError::MissingAuth),
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Performs the next upstream call and moves to the following state.
    ///
    /// Calling `step` once `TracksAdded` has been reached is a no-op. Once a step
    /// has failed the generation stays `Failed`, and further calls return
    /// [`GenerationError::Halted`] without contacting Spotify.
    pub async fn step<A>(
        &mut self,
        api: &A,
        request: &GenerationRequest,
    ) -> Result<&GenerationState, GenerationError>
    where
        A: SpotifyApi + ?Sized,
    {
        let outcome = match &self.state {
            GenerationState::Idle => {
                let seeds = utils::select_seeds(&request.tracks, &request.artists);
                api.recommendations(&self.token, &seeds, &request.targets, request.limit)
                    .await
                    .map(|recommendations| GenerationState::RecommendationsFetched {
                        recommendations,
                    })
                    .map_err(|e| {
                        let failed = GenerationState::Failed {
                            step: GenerationStep::Recommendations,
                            playlist_id: None,
                        };
                        (failed, GenerationError::Recommendations(e))
                    })
            }
            GenerationState::RecommendationsFetched { recommendations } => api
                .create_playlist(&self.token, &request.user, &request.name, &request.description)
                .await
                .map(|playlist_id| GenerationState::PlaylistCreated {
                    playlist_id,
                    recommendations: recommendations.clone(),
                })
                .map_err(|e| {
                    let failed = GenerationState::Failed {
                        step: GenerationStep::Creation,
                        playlist_id: None,
                    };
                    (failed, GenerationError::Creation(e))
                }),
            GenerationState::PlaylistCreated {
                playlist_id,
                recommendations,
            } => {
                let seed_tracks = utils::split_ids(&request.tracks);
                let uris = utils::build_track_uris(&seed_tracks, recommendations);

                match api
                    .add_tracks(&self.token, &request.user, playlist_id, &uris)
                    .await
                {
                    Ok(()) => Ok(GenerationState::TracksAdded {
                        playlist_id: playlist_id.clone(),
                        tracks_added: uris.len(),
                    }),
                    Err(e) => {
                        tracing::warn!(
                            playlist_id = %playlist_id,
                            "Adding tracks failed, playlist is left empty"
                        );
                        let failed = GenerationState::Failed {
                            step: GenerationStep::AddTracks,
                            playlist_id: Some(playlist_id.clone()),
                        };
                        Err((failed, GenerationError::AddTracks(e)))
                    }
                }
            }
            GenerationState::TracksAdded { .. } => return Ok(&self.state),
            GenerationState::Failed { step, .. } => return Err(GenerationError::Halted(*step)),
        };

        match outcome {
            Ok(next) => {
                tracing::debug!(from = self.state.name(), to = next.name(), "Generation advanced");
                self.state = next;
                Ok(&self.state)
            }
            Err((failed, e)) => {
                tracing::debug!(from = self.state.name(), to = failed.name(), "Generation failed");
                self.state = failed;
                Err(e)
            }
        }
    }

    /// Drives the generation to completion.
    pub async fn run<A>(
        mut self,
        api: &A,
        request: &GenerationRequest,
    ) -> Result<GeneratedPlaylist, GenerationError>
    where
        A: SpotifyApi + ?Sized,
    {
        loop {
            if let GenerationState::TracksAdded {
                playlist_id,
                tracks_added,
            } = self.step(api, request).await?
            {
                return Ok(GeneratedPlaylist {
                    playlist_id: playlist_id.clone(),
                    tracks_added: *tracks_added,
                });
            }
        }
    }
}

/// Runs a full generation: recommend, create, populate.
pub async fn generate_playlist<A>(
    api: &A,
    token: Option<String>,
    request: &GenerationRequest,
) -> Result<GeneratedPlaylist, GenerationError>
where
    A: SpotifyApi + ?Sized,
{
    PlaylistGeneration::start(token)?.run(api, request).await
}
