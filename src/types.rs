use serde::{Deserialize, Serialize};

/// Token returned by the web-player session-cookie exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebTokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Token returned by the client-credentials grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<TrackCandidate>,
}

/// A track record returned by a search query. Ephemeral, sourced from a
/// single search response and discarded after selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCandidate {
    pub id: String,
    pub name: String,
    pub popularity: u32,
}
