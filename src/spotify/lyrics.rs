use reqwest::Client;

use crate::config::Config;

const LYRICS_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.0.0 Safari/537.36";

/// Fetches the lyrics document for a track from the internal lyrics API.
///
/// Issues a GET against `{lyrics_base_url}{track_id}` with the fixed query
/// parameters the web player sends (`format=json`, `vocalRemoval=false`,
/// `market=from_token`) and the required `App-platform` header. The body is
/// returned verbatim as text so the relay can pass it through untouched.
///
/// # Arguments
///
/// * `config` - Relay configuration holding the lyrics base URL
/// * `token` - Web-player bearer token from [`super::auth::web_player_token`]
/// * `track_id` - Opaque Spotify track identifier
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The provider's lyrics JSON body, unmodified
/// - `Err(reqwest::Error)` - Network error or non-success upstream status
///
/// # Example
///
/// ```
/// let body = fetch_lyrics(&config, &token, "4uLU6hMCjMI75M1A2tKUQC").await?;
/// ```
pub async fn fetch_lyrics(
    config: &Config,
    token: &str,
    track_id: &str,
) -> Result<String, reqwest::Error> {
    let api_url = format!(
        "{base}{id}?format=json&vocalRemoval=false&market=from_token",
        base = &config.lyrics_base_url,
        id = track_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .header("App-platform", "WebPlayer")
        .header("User-Agent", LYRICS_USER_AGENT)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.text().await
}
