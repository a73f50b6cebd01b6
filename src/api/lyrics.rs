use std::sync::Arc;

use axum::{
    Extension,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{config::Config, failure, info, spotify};

/// Relays the provider's lyrics JSON for a track ID.
///
/// Exchanges the stored session cookie for a web-player bearer token, then
/// fetches lyrics for the track and returns the body verbatim. Any upstream
/// failure aborts the request with a 500 and a generic message.
pub async fn lyrics(
    Path(track_id): Path<String>,
    Extension(config): Extension<Arc<Config>>,
) -> Response {
    info!("Fetching lyrics for track ID: {}", track_id);

    let result = async {
        let token = spotify::auth::web_player_token(&config).await?;
        spotify::lyrics::fetch_lyrics(&config, &token, &track_id).await
    }
    .await;

    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            failure!("Error fetching lyrics for track ID: {} - {}", track_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch lyrics").into_response()
        }
    }
}
