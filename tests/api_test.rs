use axum::body::to_bytes;
use axum::http::{StatusCode, header};
use lyrelay::api::selection_response;
use lyrelay::types::TrackCandidate;

// Helper function to create a test track candidate
fn create_test_track(id: &str, name: &str, popularity: u32) -> TrackCandidate {
    TrackCandidate {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
    }
}

#[tokio::test]
async fn test_selection_response_redirects_with_302() {
    let candidates = vec![
        create_test_track("A", "Song", 10),
        create_test_track("B", "Song (Remix)", 90),
    ];

    let response = selection_response(&candidates, false);

    // Resolved track answers with a literal 302 and the direct lyrics path
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/getLyrics/A"
    );
}

#[tokio::test]
async fn test_selection_response_redirects_to_remix_when_wanted() {
    let candidates = vec![
        create_test_track("A", "Song", 90),
        create_test_track("B", "Song (Remix)", 10),
    ];

    let response = selection_response(&candidates, true);

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/getLyrics/B"
    );
}

#[tokio::test]
async fn test_selection_response_empty_candidates_returns_404() {
    let candidates: Vec<TrackCandidate> = vec![];

    let response = selection_response(&candidates, false);

    // Zero tracks from upstream maps to 404 with the descriptive message
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"No tracks found");
}

#[tokio::test]
async fn test_selection_response_no_suitable_track_returns_404() {
    let candidates = vec![
        create_test_track("A", "Song (Remix)", 90),
        create_test_track("B", "Song (Club Remix)", 40),
    ];

    let response = selection_response(&candidates, false);

    // Remix-only results with no remix wanted survive neither the filter
    // nor the non-remix fallback
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"No suitable tracks found");
}
