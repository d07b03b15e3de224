//! Configuration management for the playlist relay.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the relay starts
//! without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::spotify::DEFAULT_API_URL;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "playlist_relay=debug,tower_http=info";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `playlist-relay/.env`, creating the directory if needed, and then for a `.env`
/// file in the working directory. Variables that are already set are never
/// overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/playlist-relay/.env`
/// - macOS: `~/Library/Application Support/playlist-relay/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-relay/.env`
///
/// # Errors
///
/// Returns an error when the data directory cannot be created or when neither
/// `.env` file could be loaded. A missing file is not fatal for the caller since
/// all settings have defaults.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let from_data_dir = dotenv::from_path(&path);
    let from_cwd = dotenv::dotenv();

    match (from_data_dir, from_cwd) {
        (Err(e), Err(_)) => Err(format!("No .env file loaded ({}): {}", path.display(), e)),
        _ => Ok(()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-relay/.env");
    path
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
///
/// # Example
///
/// ```ignore
/// let addr = server_addr(); // e.g., "0.0.0.0:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the timeout applied to every Spotify request (`SPOTIFY_API_TIMEOUT_SECS`).
///
/// Unparsable or zero values fall back to the default.
pub fn spotify_api_timeout() -> Duration {
    let secs = env::var("SPOTIFY_API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_API_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the single origin allowed by CORS (`CORS_ALLOWED_ORIGIN`).
pub fn cors_allowed_origin() -> String {
    env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
}

/// Returns the tracing filter directive (`RUST_LOG`).
pub fn log_filter() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}
