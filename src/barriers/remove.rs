use crate::models::Barrier;

/// Remove the first barrier whose key matches `key`
///
/// Scans left to right and removes exactly one element, shifting the rest
/// down. A missing key or an empty list leaves `barriers` untouched.
pub fn remove_barrier(barriers: &mut Vec<Barrier>, key: &str) {
    if let Some(pos) = barriers.iter().position(|b| b.key == key) {
        let removed = barriers.remove(pos);
        tracing::debug!(key, high = %removed.high, remaining = barriers.len(), "Barrier removed");
    } else {
        tracing::trace!(key, "No barrier with key, nothing removed");
    }
}
