//! # Spotify Integration Module
//!
//! This module implements the outbound half of the relay: authentication
//! against Spotify's token endpoints and the actual lyrics and search calls.
//! It abstracts away HTTP request construction, header handling and response
//! deserialization, providing a small typed interface for the HTTP handlers.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles one domain of Spotify API functionality:
//!
//! ```text
//! HTTP Handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (token exchange)
//!     ├── Lyrics (verbatim relay)
//!     └── Search (track candidates)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify APIs
//! ```
//!
//! ## Authentication Strategy
//!
//! Two independent token exchanges are implemented, matching the two relay
//! paths:
//!
//! - **Web-player token** ([`auth::web_player_token`]): presents the stored
//!   `sp_dc` session cookie to the web-player token endpoint and receives a
//!   short-lived bearer token accepted by the internal lyrics API.
//! - **Client credentials** ([`auth::client_credentials_token`]): posts a
//!   `client_credentials` grant with a Basic authorization header
//!   (base64 of `client_id:client_secret`) and receives a bearer token for
//!   the public Web API.
//!
//! Tokens are exchanged per request and never persisted or cached.
//!
//! ## Error Handling Philosophy
//!
//! Every function returns `Result<_, reqwest::Error>`. Non-success upstream
//! statuses are converted to errors via `error_for_status`, so callers see a
//! single failure channel covering network errors, HTTP errors and malformed
//! response bodies. There are no retries; failures surface immediately and
//! abort only the current request.
//!
//! ## API Coverage
//!
//! - `GET  <web token endpoint>` - session-cookie token exchange
//! - `POST <api token endpoint>` - client-credentials token exchange
//! - `GET  <lyrics endpoint>/{track_id}` - color-lyrics fetch
//! - `GET  <search endpoint>?q=artist:..%20track:..` - track search
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde** - derive types for token and search responses
//! - **base64** - Basic authorization header encoding

pub mod auth;
pub mod lyrics;
pub mod search;
