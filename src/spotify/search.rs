use reqwest::Client;

use crate::{
    config::Config,
    types::{SearchResponse, TrackCandidate},
};

/// Queries the public search API for tracks matching a musician and title.
///
/// Builds a field-scoped query (`artist:<musician> track:<title>`) limited
/// to ten track results, the same shape the original web search uses. Query
/// parameters are attached via reqwest so the musician and title are
/// URL-encoded correctly.
///
/// # Arguments
///
/// * `config` - Relay configuration holding the search endpoint URL
/// * `token` - Bearer token from [`super::auth::client_credentials_token`]
/// * `musician` - Artist name to scope the search to
/// * `track` - Track title to search for
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackCandidate>)` - Candidate tracks in response order; may be empty
/// - `Err(reqwest::Error)` - Network error, HTTP error, or malformed response
///
/// # Example
///
/// ```
/// let candidates = search_tracks(&config, &token, "Daft Punk", "One More Time").await?;
/// let selected = utils::select_track(&candidates, false);
/// ```
pub async fn search_tracks(
    config: &Config,
    token: &str,
    musician: &str,
    track: &str,
) -> Result<Vec<TrackCandidate>, reqwest::Error> {
    let query = format!("artist:{} track:{}", musician, track);

    let client = Client::new();
    let response = client
        .get(&config.search_url)
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "10")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let results = response.json::<SearchResponse>().await?;

    Ok(results.tracks.items)
}
