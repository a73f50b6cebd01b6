use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{config::Config, failure, info, spotify, types::TrackCandidate, utils, warning};

/// Resolves a track by musician and title, then redirects to `/getLyrics`.
///
/// Exchanges client credentials for a bearer token, queries the public
/// search API and applies the selection heuristic from
/// [`utils::select_track`]. A resolved track answers with a 302 redirect to
/// the direct lyrics endpoint; an empty or filtered-out result answers 404.
pub async fn lyrics_by_name(
    Path((musician, track)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    Extension(config): Extension<Arc<Config>>,
) -> Response {
    info!(
        "Searching for lyrics by musician: {}, track: {}",
        musician, track
    );

    // remix preference counts only when the parameter is exactly "true"
    let want_remix = params.get("remix").map(|v| v == "true").unwrap_or(false);

    let result = async {
        let token = spotify::auth::client_credentials_token(&config).await?;
        spotify::search::search_tracks(&config, &token, &musician, &track).await
    }
    .await;

    let candidates = match result {
        Ok(candidates) => candidates,
        Err(e) => {
            failure!("Error searching for lyrics - {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to search for lyrics")
                .into_response();
        }
    };

    selection_response(&candidates, want_remix)
}

/// Maps a search result onto the relay's response.
///
/// A resolved track answers with a 302 redirect to the direct lyrics
/// endpoint; an empty candidate list answers 404 "No tracks found", and a
/// list where nothing survives the selection heuristic answers 404
/// "No suitable tracks found".
pub fn selection_response(candidates: &[TrackCandidate], want_remix: bool) -> Response {
    if candidates.is_empty() {
        warning!("No tracks found");
        return (StatusCode::NOT_FOUND, "No tracks found").into_response();
    }

    match utils::select_track(candidates, want_remix) {
        Some(selected) => {
            info!("Found track ID: {}", selected.id);
            // explicit 302; axum's Redirect helpers answer 303/307/308
            (
                StatusCode::FOUND,
                [(header::LOCATION, format!("/getLyrics/{}", selected.id))],
            )
                .into_response()
        }
        None => {
            warning!("No suitable tracks found");
            (StatusCode::NOT_FOUND, "No suitable tracks found").into_response()
        }
    }
}
