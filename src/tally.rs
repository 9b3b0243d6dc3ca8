//! Accumulates view counts per identifier.

use itertools::Itertools;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A pair of identifier and accumulated view count.
pub type ViewCount = (String, u64);

/// Sums view counts per identifier, remembering the order in which
/// identifiers were first seen.
///
/// The first-seen order is what breaks ties when ranking, so ranking the
/// same tally twice always gives the same answer.
#[derive(Debug, Default)]
pub struct ViewTally {
    totals: Vec<ViewCount>,
    index: HashMap<String, usize>,
}

impl ViewTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `views` to the running total for `id`.
    pub fn add(&mut self, id: impl Into<String>, views: u64) {
        let id = id.into();
        match self.index.entry(id) {
            Entry::Occupied(entry) => {
                let total = &mut self.totals[*entry.get()].1;
                *total = total.saturating_add(views);
            }
            Entry::Vacant(entry) => {
                self.totals.push((entry.key().clone(), views));
                entry.insert(self.totals.len() - 1);
            }
        }
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// True if nothing has been tallied.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// The `n` identifiers with the most views, highest first.
    ///
    /// Identifiers with equal totals keep the order in which they were
    /// first seen.
    pub fn most_viewed(&self, n: usize) -> Vec<ViewCount> {
        self.totals
            .iter()
            .sorted_by(|lhs, rhs| Ord::cmp(&rhs.1, &lhs.1))
            .take(n)
            .cloned()
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for ViewTally {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut tally = ViewTally::new();
        for (id, views) in iter {
            tally.add(id, views);
        }
        tally
    }
}
