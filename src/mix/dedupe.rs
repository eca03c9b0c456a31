use std::collections::HashSet;

/// Drops repeated track IDs, keeping the first occurrence of each in its
/// original position.
pub fn dedupe(track_ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(track_ids.len());
    let mut unique = track_ids;
    unique.retain(|id| seen.insert(id.clone()));
    unique
}
