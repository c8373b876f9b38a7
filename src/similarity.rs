use serde::Serialize;
use tracing::info;

use crate::registry::Registry;

pub const DEFAULT_SIMILARITY_LIMIT: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarPair {
    pub first: String,
    pub second: String,
    pub distance: usize,
}

/// Length gap plus the number of differing characters over the shared prefix.
///
/// Characters are compared position by position, so an insertion near the
/// start of one string shifts every later comparison.
pub fn positional_mismatch_count(a: &str, b: &str) -> usize {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let mismatches = a
        .chars()
        .zip(b.chars())
        .filter(|(left, right)| left != right)
        .count();

    len_a.abs_diff(len_b) + mismatches
}

// Each key is compared only against keys sorting after it; returned pairs
// keep that order.
pub fn annotate(registry: &mut Registry, limit: i64) -> Vec<SimilarPair> {
    let mut pairs = Vec::new();
    let Ok(limit) = usize::try_from(limit) else {
        info!(limit, "negative similarity limit, skipping analysis");
        return pairs;
    };

    let keys = registry.sorted_keys();
    for (index, key_a) in keys.iter().enumerate() {
        for key_b in &keys[index + 1..] {
            let distance = positional_mismatch_count(key_a, key_b);
            if distance > limit {
                continue;
            }

            let (Some(name_a), Some(name_b)) = (
                registry.get(key_a).map(|r| r.original_name().to_string()),
                registry.get(key_b).map(|r| r.original_name().to_string()),
            ) else {
                continue;
            };

            if let Some(record) = registry.get_mut(key_a) {
                record.add_similar_name(&name_b);
            }
            if let Some(record) = registry.get_mut(key_b) {
                record.add_similar_name(&name_a);
            }

            info!(first = %name_a, second = %name_b, distance, "similar technology names");
            pairs.push(SimilarPair {
                first: name_a,
                second: name_b,
                distance,
            });
        }
    }

    info!(
        keys = keys.len(),
        limit,
        similar_pairs = pairs.len(),
        "similarity analysis complete"
    );

    pairs
}
