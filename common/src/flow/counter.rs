use std::hash::Hash;

use indexmap::IndexMap;

/// Occurrence counter that iterates in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K: Hash + Eq> {
    counts: IndexMap<K, u64>,
}

impl<K: Hash + Eq> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> Counter<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Adds one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`, appending the key if it is new.
    pub fn add(&mut self, key: K, count: u64) {
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Fold-style [`Counter::add`], for building a counter with `Iterator::fold`.
    pub fn with(mut self, key: K, count: u64) -> Self {
        self.add(key, count);
        self
    }

    pub fn get(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<K: Hash + Eq> FromIterator<(K, u64)> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |counter, (key, count)| counter.with(key, count))
    }
}

impl<K: Hash + Eq> Extend<K> for Counter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
