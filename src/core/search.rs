//! Substring-match ranking search
//!
//! Classifies each feature into at most one bucket (title, description,
//! keywords) and ranks within a bucket by first-occurrence position.
//! Read-only over the index; safe to call from concurrent handlers.

use crate::core::index::IndexedFeature;

/// Search the indexed collection for a normalized query.
///
/// A feature is tested against its normalized title, then description, then
/// keywords; the first field containing the query decides its bucket. Buckets
/// are each sorted ascending by the query's first occurrence (stable for
/// ties) and concatenated: title matches, then description, then keywords.
///
/// Returns references into the collection; callers truncate as needed.
pub fn search<'a>(query: &str, features: &'a [IndexedFeature]) -> Vec<&'a IndexedFeature> {
    let mut in_title: Vec<(usize, &IndexedFeature)> = Vec::new();
    let mut in_description: Vec<(usize, &IndexedFeature)> = Vec::new();
    let mut in_keywords: Vec<(usize, &IndexedFeature)> = Vec::new();

    for feature in features {
        if let Some(index) = feature.norm_title.find(query) {
            in_title.push((index, feature));
        } else if let Some(index) = feature.norm_description.find(query) {
            in_description.push((index, feature));
        } else if let Some(index) = feature.norm_keywords.find(query) {
            in_keywords.push((index, feature));
        }
    }

    let mut results =
        Vec::with_capacity(in_title.len() + in_description.len() + in_keywords.len());
    for mut bucket in [in_title, in_description, in_keywords] {
        bucket.sort_by_key(|&(index, _)| index);
        results.extend(bucket.into_iter().map(|(_, feature)| feature));
    }
    results
}
