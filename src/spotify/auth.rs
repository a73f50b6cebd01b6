use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    config::Config,
    types::{ClientTokenResponse, WebTokenResponse},
};

const WEB_PLAYER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Exchanges the stored `sp_dc` session cookie for a web-player bearer token.
///
/// Performs a GET against the configured web token endpoint, presenting the
/// session cookie and a browser User-Agent. The returned token is accepted
/// by the internal lyrics API.
///
/// # Arguments
///
/// * `config` - Relay configuration holding the cookie and the endpoint URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - Fresh access token for the lyrics API
/// - `Err(reqwest::Error)` - Network error, HTTP error, or malformed response
///
/// # Token Lifecycle
///
/// The token is short-lived and exchanged anew on every request; nothing is
/// cached or persisted.
///
/// # Example
///
/// ```
/// let token = web_player_token(&config).await?;
/// let lyrics = fetch_lyrics(&config, &token, "4uLU6hMCjMI75M1A2tKUQC").await?;
/// ```
pub async fn web_player_token(config: &Config) -> Result<String, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(&config.web_token_url)
        .header("Cookie", format!("sp_dc={}", config.sp_dc_cookie))
        .header("User-Agent", WEB_PLAYER_USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let token = response.json::<WebTokenResponse>().await?;

    Ok(token.access_token)
}

/// Exchanges client credentials for a public Web API bearer token.
///
/// Posts a `client_credentials` grant to the configured token endpoint with
/// a Basic authorization header built from the client ID and secret. This is
/// the standard OAuth 2.0 client-credentials flow used by the search path.
///
/// # Arguments
///
/// * `config` - Relay configuration holding the credentials and endpoint URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - Access token for the public Web API
/// - `Err(reqwest::Error)` - Network error, HTTP error, or malformed response
///
/// # Security Note
///
/// The client secret is only ever sent base64-encoded inside the Basic
/// header to the token endpoint; it is never logged.
///
/// # Example
///
/// ```
/// let token = client_credentials_token(&config).await?;
/// let tracks = search_tracks(&config, &token, "Daft Punk", "One More Time").await?;
/// ```
pub async fn client_credentials_token(config: &Config) -> Result<String, reqwest::Error> {
    let encoded = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let client = Client::new();
    let response = client
        .post(&config.api_token_url)
        .header("Authorization", format!("Basic {}", encoded))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let token = response.json::<ClientTokenResponse>().await?;

    Ok(token.access_token)
}
