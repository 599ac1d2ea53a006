//! Tag frequency reducers: count a flat tag sequence and pick the top N.

use ahash::AHashMap;

/// Frequency counts over `tags`, ranked descending, ties broken by
/// first-encountered order. A stable sort over insertion-ordered entries
/// keeps the ranking deterministic across runs and chunk layouts (the flat
/// sequence is always merged in original chunk order).
pub fn top_tags(tags: &[String], n: usize) -> Vec<(String, u64)> {
    let mut index = AHashMap::<&str, usize>::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for tag in tags {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push((tag.clone(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}
