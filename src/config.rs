//! Configuration management for the Spotify lyrics relay.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. All credentials and upstream URLs are read
//! once at startup into an explicit [`Config`] struct that is passed to the
//! server and handlers, instead of being looked up ad hoc per request.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lyrelay/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lyrelay/.env`
/// - macOS: `~/Library/Application Support/lyrelay/.env`
/// - Windows: `%LOCALAPPDATA%/lyrelay/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails. A missing file
/// is not an error when the variables are already present in the process
/// environment.
///
/// # Example
///
/// ```
/// use lyrelay::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lyrelay/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Variables may also come from the process environment directly
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Resolved relay configuration.
///
/// Holds the bind address, the `sp_dc` session cookie used for the
/// web-player token exchange, the client credentials for the public Web
/// API, and the upstream endpoint URLs. Constructed once via
/// [`Config::from_env`] and shared with handlers as `Arc<Config>`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address and port the relay binds to, e.g. `127.0.0.1:3000`.
    pub server_address: String,
    /// Value of the `sp_dc` session cookie exchanged for a web-player token.
    pub sp_dc_cookie: String,
    /// Endpoint that exchanges the session cookie for a web-player token.
    pub web_token_url: String,
    /// Base URL of the lyrics endpoint; the track ID is appended directly.
    pub lyrics_base_url: String,
    /// Client ID registered with Spotify's developer platform.
    pub client_id: String,
    /// Client secret belonging to [`Config::client_id`].
    pub client_secret: String,
    /// Token endpoint for the client-credentials grant.
    pub api_token_url: String,
    /// Public search endpoint.
    pub search_url: String,
}

impl Config {
    /// Reads the full relay configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_ADDRESS`
    /// - `SPOTIFY_SP_DC_COOKIE`
    /// - `SPOTIFY_WEB_TOKEN_URL`
    /// - `SPOTIFY_LYRICS_BASE_URL`
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`
    /// - `SPOTIFY_API_AUTH_CLIENT_SECRET`
    /// - `SPOTIFY_API_TOKEN_URL`
    /// - `SPOTIFY_API_SEARCH_URL`
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable. Callers treat
    /// this as a fatal startup error.
    ///
    /// # Example
    ///
    /// ```
    /// let cfg = Config::from_env()?;
    /// println!("Binding to {}", cfg.server_address);
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            server_address: require("SERVER_ADDRESS")?,
            sp_dc_cookie: require("SPOTIFY_SP_DC_COOKIE")?,
            web_token_url: require("SPOTIFY_WEB_TOKEN_URL")?,
            lyrics_base_url: require("SPOTIFY_LYRICS_BASE_URL")?,
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            api_token_url: require("SPOTIFY_API_TOKEN_URL")?,
            search_url: require("SPOTIFY_API_SEARCH_URL")?,
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
