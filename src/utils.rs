use crate::types::TrackCandidate;

/// Returns true if a track's display name classifies it as a remix.
///
/// The classification is a case-insensitive substring test for "remix".
pub fn is_remix(name: &str) -> bool {
    name.to_lowercase().contains("remix")
}

/// Picks at most one track from a list of search candidates.
///
/// Candidates whose remix classification matches `want_remix` are kept and
/// ordered by popularity descending; ties keep their original relative
/// order. If no candidate matches, the selection falls back to the
/// non-remix candidates from the full original list, ordered the same way.
/// Returns `None` when both sets are empty, e.g. for an empty input or a
/// remix-only list with `want_remix` unset.
pub fn select_track(candidates: &[TrackCandidate], want_remix: bool) -> Option<TrackCandidate> {
    let mut filtered: Vec<&TrackCandidate> = candidates
        .iter()
        .filter(|track| is_remix(&track.name) == want_remix)
        .collect();

    if filtered.is_empty() {
        filtered = candidates
            .iter()
            .filter(|track| !is_remix(&track.name))
            .collect();
    }

    // stable sort, ties keep search-response order
    filtered.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    filtered.first().map(|track| (*track).clone())
}
