//! Spotify Playlist Relay Library
//!
//! Backend relay that generates Spotify playlists on behalf of a front-end
//! application. A request carries seed tracks and artists, optional audio-feature
//! targets and the user's bearer token; the relay asks Spotify for
//! recommendations, creates a playlist and fills it.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints, request validation and error responses
//! - `config` - Configuration management and environment variables
//! - `generator` - The recommend, create, populate workflow
//! - `server` - HTTP server bootstrap (CORS, tracing, shutdown)
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Seed and track URI helpers
//!
//! # Example
//!
//! ```ignore
//! use playlist_relay::{api, config, server, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let _ = config::load_env().await;
//!     let client = SpotifyClient::new(&config::spotify_apiurl(), config::spotify_api_timeout())?;
//!     server::start_api_server(
//!         &config::server_addr(),
//!         api::AppState::new(client),
//!         &config::cors_allowed_origin(),
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod generator;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```ignore
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```ignore
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message to stderr with a red exclamation mark and exits
/// the process with code 1.
///
/// Only meant for startup failures in the binary. Request handling never
/// exits the process.
///
/// # Example
///
/// ```ignore
/// error!("Failed to start server: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning to stderr with a yellow exclamation mark.
///
/// # Example
///
/// ```ignore
/// warning!("Cannot load environment: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
