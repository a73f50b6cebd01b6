use lyrelay::types::TrackCandidate;
use lyrelay::utils::*;

// Helper function to create a test track candidate
fn create_test_track(id: &str, name: &str, popularity: u32) -> TrackCandidate {
    TrackCandidate {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
    }
}

#[test]
fn test_is_remix() {
    // Plain titles are not remixes
    assert!(!is_remix("Song"));
    assert!(!is_remix("One More Time"));

    // Substring match anywhere in the name
    assert!(is_remix("Song (Remix)"));
    assert!(is_remix("Remixed and Remastered"));

    // Case-insensitive
    assert!(is_remix("Song (REMIX)"));
    assert!(is_remix("song remix"));
    assert!(is_remix("Song (ReMiX Edit)"));

    // Empty name is not a remix
    assert!(!is_remix(""));
}

#[test]
fn test_select_track_prefers_original_over_remix() {
    let candidates = vec![
        create_test_track("A", "Song", 10),
        create_test_track("B", "Song (Remix)", 90),
    ];

    // Even though the remix is far more popular, remix=false picks the original
    let selected = select_track(&candidates, false).unwrap();
    assert_eq!(selected.id, "A");
}

#[test]
fn test_select_track_picks_remix_when_wanted() {
    let candidates = vec![
        create_test_track("A", "Song", 90),
        create_test_track("B", "Song (Remix)", 10),
    ];

    let selected = select_track(&candidates, true).unwrap();
    assert_eq!(selected.id, "B");
}

#[test]
fn test_select_track_highest_popularity_wins() {
    let candidates = vec![
        create_test_track("A", "Song - Live", 30),
        create_test_track("B", "Song", 80),
        create_test_track("C", "Song - Acoustic", 55),
    ];

    // All three are non-remixes; the most popular one is returned
    let selected = select_track(&candidates, false).unwrap();
    assert_eq!(selected.id, "B");
}

#[test]
fn test_select_track_ties_keep_original_order() {
    let candidates = vec![
        create_test_track("A", "Song", 50),
        create_test_track("B", "Song - Radio Edit", 50),
        create_test_track("C", "Song - Single Version", 50),
    ];

    // Equal popularity: the first candidate from the response wins
    let selected = select_track(&candidates, false).unwrap();
    assert_eq!(selected.id, "A");
}

#[test]
fn test_select_track_fallback_to_non_remix() {
    let candidates = vec![create_test_track("A", "Song", 10)];

    // No remix exists, so the remix preference falls back to non-remixes
    let selected = select_track(&candidates, true).unwrap();
    assert_eq!(selected.id, "A");
}

#[test]
fn test_select_track_fallback_sorts_by_popularity() {
    let candidates = vec![
        create_test_track("A", "Song - Live", 20),
        create_test_track("B", "Song", 70),
    ];

    // Remix wanted but none exists; fallback still picks the most popular original
    let selected = select_track(&candidates, true).unwrap();
    assert_eq!(selected.id, "B");
}

#[test]
fn test_select_track_only_remixes_without_remix_preference() {
    let candidates = vec![
        create_test_track("A", "Song (Remix)", 90),
        create_test_track("B", "Song (Club Remix)", 40),
    ];

    // The fallback also excludes remixes, so nothing qualifies
    let selected = select_track(&candidates, false);
    assert!(selected.is_none());
}

#[test]
fn test_select_track_empty_candidates() {
    let candidates: Vec<TrackCandidate> = vec![];

    assert!(select_track(&candidates, false).is_none());
    assert!(select_track(&candidates, true).is_none());
}

#[test]
fn test_select_track_matching_classification() {
    let candidates = vec![
        create_test_track("A", "Song", 10),
        create_test_track("B", "Song (Remix)", 90),
        create_test_track("C", "Another Song", 60),
        create_test_track("D", "Another Song (VIP Remix)", 20),
    ];

    // Whenever a matching candidate exists, the result matches the preference
    let original = select_track(&candidates, false).unwrap();
    assert!(!is_remix(&original.name));
    assert_eq!(original.id, "C"); // highest-popularity non-remix

    let remix = select_track(&candidates, true).unwrap();
    assert!(is_remix(&remix.name));
    assert_eq!(remix.id, "B"); // highest-popularity remix
}

#[test]
fn test_select_track_does_not_mutate_input() {
    let candidates = vec![
        create_test_track("A", "Song", 10),
        create_test_track("B", "Song (Remix)", 90),
    ];
    let before = candidates.clone();

    let _ = select_track(&candidates, true);

    // Selection is pure; the input list keeps its order and contents
    assert_eq!(candidates, before);
}
