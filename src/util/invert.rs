//! Multimap inversion
//!
//! Turns `K -> [V]` into `V -> [K]`. When several keys share a value the
//! inverted entry accumulates all of them, in the order they are first seen.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Invert an insertion-ordered multimap
///
/// Output entries are ordered by the first time each value appears. A key
/// is listed at most once per value even if its input list repeats it.
pub fn invert<K, V, I, M>(map: M) -> Vec<(V, Vec<K>)>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
    I: IntoIterator<Item = V>,
    M: IntoIterator<Item = (K, I)>,
{
    let mut slots: HashMap<V, usize> = HashMap::new();
    let mut recorded: HashSet<(usize, K)> = HashSet::new();
    let mut inverted: Vec<(V, Vec<K>)> = Vec::new();

    for (key, values) in map {
        for value in values {
            let slot = *slots.entry(value.clone()).or_insert_with(|| {
                inverted.push((value, Vec::new()));
                inverted.len() - 1
            });
            if recorded.insert((slot, key.clone())) {
                inverted[slot].1.push(key.clone());
            }
        }
    }

    inverted
}

/// Invert a `HashMap` multimap
///
/// `HashMap` iteration order is unspecified, so keys are visited in sorted
/// order to keep the accumulated lists deterministic.
pub fn invert_map<K, V>(map: &HashMap<K, Vec<V>>) -> HashMap<V, Vec<K>>
where
    K: Clone + Ord + Hash,
    V: Clone + Eq + Hash,
{
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    invert(
        entries
            .into_iter()
            .map(|(key, values)| (key.clone(), values.iter().cloned())),
    )
    .into_iter()
    .collect()
}
