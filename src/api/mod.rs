//! # API Module
//!
//! This module provides the HTTP endpoints of the lyrics relay. Each handler
//! forwards a request to Spotify's internal or public APIs, performing the
//! necessary token exchange and passing the response back to the caller.
//!
//! ## Endpoints
//!
//! ### Liveness
//!
//! - [`key`] - Sanity-check endpoint that always returns `success`.
//!
//! ### Lyrics
//!
//! - [`lyrics`] - Exchanges the stored `sp_dc` session cookie for a
//!   web-player bearer token, fetches lyrics for the given track ID and
//!   relays the provider's JSON body verbatim.
//! - [`lyrics_by_name`] - Resolves a track from a musician name and a track
//!   title via the public search API, applies the remix selection heuristic
//!   and redirects to the direct lyrics endpoint with the resolved ID.
//!
//! ## Error Semantics
//!
//! - Upstream call failures (network errors or non-success status) map to
//!   `500` with a generic message and are logged at error level.
//! - An empty search result or a result with no suitable track maps to `404`
//!   with a descriptive message, logged as a warning.
//! - No request failure is fatal to the process; each request fails
//!   independently.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router in
//! [`crate::server`], receiving the shared [`crate::config::Config`] through
//! an `Extension` layer.
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API client used by the handlers
//! - [`crate::utils`] - Track selection heuristic

mod by_name;
mod key;
mod lyrics;

pub use by_name::{lyrics_by_name, selection_response};
pub use key::key;
pub use lyrics::lyrics;
