//! Insertion-ordered frequency tables
//!
//! A [`FrequencyTable`] counts how often each key occurs and remembers the
//! position at which every key was first seen. Ranking is a stable sort by
//! descending count over that first-seen order, so ties always resolve to the
//! key that appeared earliest in the input.
//!
//! Keys can be added one at a time ([`FrequencyTable::add`]) or in groups
//! ([`FrequencyTable::add_group`]). A group models one respondent: every key in
//! the group increments its occurrence count, but the respondent count of a key
//! increments at most once per group.
//!
//! # Examples
//!
//! ```
//! use skillscope_stats::frequency::FrequencyTable;
//!
//! let mut table = FrequencyTable::new();
//! table.add_group(["Excel", "Excel", "Word"]);
//! table.add_group(["Word"]);
//!
//! let excel = table.get("Excel").unwrap();
//! assert_eq!(excel.count, 2);
//! assert_eq!(excel.respondents, 1);
//!
//! let ranked = table.ranked(None);
//! assert_eq!(ranked[0].key, "Excel"); // tie on count, "Excel" was seen first
//! assert_eq!(ranked[1].key, "Word");
//! ```

use std::{borrow::Borrow, cmp::Reverse, hash::Hash};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Counts for a single key in a [`FrequencyTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Number of occurrences, multiplicity included
    pub count: usize,
    /// Number of groups containing the key at least once
    pub respondents: usize,
    last_group: usize,
}

/// Frequency counts keyed by `K`, kept in first-occurrence order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: IndexMap<K, FrequencyEntry>,
    groups: usize,
}

/// A ranked key with its counts.
///
/// Produced by [`FrequencyTable::ranked`] and [`rank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranked<K> {
    /// The ranked key
    pub key: K,
    /// Number of occurrences, multiplicity included
    pub count: usize,
    /// Number of groups containing the key at least once
    pub respondents: usize,
}

impl<K> Ranked<K> {
    /// Converts the key, keeping the counts.
    pub fn map_key<U, F>(self, f: F) -> Ranked<U>
    where
        F: FnOnce(K) -> U,
    {
        Ranked {
            key: f(self.key),
            count: self.count,
            respondents: self.respondents,
        }
    }
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            groups: 0,
        }
    }
}

impl<K> FrequencyTable<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table where every item is its own group.
    ///
    /// Respondent counts therefore equal occurrence counts.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut table = Self::new();
        for item in items {
            table.add(item);
        }
        table
    }

    /// Builds a table from groups of keys, one group per respondent.
    #[must_use]
    pub fn from_groups<G, I>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = K>,
    {
        let mut table = Self::new();
        for group in groups {
            table.add_group(group);
        }
        table
    }

    /// Counts a single key as its own group.
    pub fn add(&mut self, key: K) {
        self.add_group([key]);
    }

    /// Counts a group of keys.
    ///
    /// Every key increments its occurrence count; each distinct key of the
    /// group increments its respondent count once.
    pub fn add_group<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.groups += 1;
        let group = self.groups;
        for key in keys {
            let entry = self.entries.entry(key).or_default();
            entry.count += 1;
            if entry.last_group != group {
                entry.last_group = group;
                entry.respondents += 1;
            }
        }
    }

    /// Looks up the counts of a key.
    pub fn get<Q>(&self, key: &Q) -> Option<&FrequencyEntry>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Occurrence count of a key, zero when unseen.
    pub fn count_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).map_or(0, |entry| entry.count)
    }

    /// Respondent count of a key, zero when unseen.
    pub fn respondents_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).map_or(0, |entry| entry.respondents)
    }

    /// Ranks keys by descending occurrence count.
    ///
    /// Ties keep first-occurrence order. With `Some(limit)` at most `limit`
    /// entries are returned.
    #[must_use]
    pub fn ranked(&self, limit: Option<usize>) -> Vec<Ranked<K>> {
        let mut order = self.entries.iter().collect::<Vec<_>>();
        // stable: equal counts stay in first-seen order
        order.sort_by_key(|(_, entry)| Reverse(entry.count));
        order
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(key, entry)| Ranked {
                key: key.clone(),
                count: entry.count,
                respondents: entry.respondents,
            })
            .collect()
    }
}

impl<K> FrequencyTable<K> {
    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of groups added so far.
    #[must_use]
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Sum of all occurrence counts.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    /// Iterates keys and their counts in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &FrequencyEntry)> {
        self.entries.iter()
    }
}

/// Ranks a flat sequence of keys.
///
/// Returns at most `limit` entries ordered by descending count, ties broken by
/// the position of each key's first occurrence in `keys`.
///
/// # Examples
///
/// ```
/// use skillscope_stats::frequency::rank;
///
/// let ranked = rank(["b", "a", "a", "b", "c"], 10);
/// let keys = ranked.iter().map(|r| r.key).collect::<Vec<_>>();
/// assert_eq!(keys, ["b", "a", "c"]);
/// ```
#[must_use]
pub fn rank<I, K>(keys: I, limit: usize) -> Vec<Ranked<K>>
where
    I: IntoIterator<Item = K>,
    K: Hash + Eq + Clone,
{
    FrequencyTable::from_items(keys).ranked(Some(limit))
}
