use super::*;

/// Every collected descendant of one story, keyed by item id. Built by one
/// `fetch_all_descendants` call, read-only afterwards.
pub type DescendantIndex = HashMap<u64, Item>;
