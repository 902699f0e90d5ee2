//! Recency capping and key-based deduplication. Generic over any record type.

use std::collections::HashSet;
use std::hash::Hash;

/// Number of recent items shown per section.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// Traversal order used by [`dedupe_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Keep the earliest position in the input.
    Forward,
    /// Traverse a reversed copy; output stays reversed. On a newest-first feed
    /// this keeps the chronologically first occurrence, oldest to newest.
    Reverse,
}

/// Take up to `limit` items from the front. Input is assumed newest-first.
pub fn cap_to_recent<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().take(limit).cloned().collect()
}

/// Remove items whose key was already seen, keeping the first occurrence in
/// traversal order. Keys are compared exactly.
pub fn dedupe_by_key<T, K, F>(mut items: Vec<T>, key_fn: F, direction: Direction) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    if direction == Direction::Reverse {
        items.reverse();
    }
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(key_fn(item)));
    items
}
