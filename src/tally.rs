use std::hash::Hash;

use itertools::Itertools;

use crate::{Face, Map};

/// Distinct roll outcomes with how often each occurred.
///
/// Entries are ordered by descending count; ties keep first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct Tally {
    entries: Vec<(Vec<Face>, usize)>,
}

impl Tally {
    /// Groups `rows` by `key`, labelling each group with its first row.
    pub(crate) fn group_by<'a, I, K, F>(rows: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = &'a [Face]>,
        K: Hash + Eq,
        F: FnMut(&'a [Face]) -> K,
    {
        let mut index = Map::<K, usize>::default();
        let mut entries: Vec<(Vec<Face>, usize)> = Vec::new();
        for row in rows {
            let i = *index.entry(key(row)).or_insert_with(|| {
                entries.push((row.to_vec(), 0));
                entries.len() - 1
            });
            entries[i].1 += 1;
        }
        let entries = entries
            .into_iter()
            .sorted_by(|(_, x), (_, y)| y.cmp(x))
            .collect();
        Self { entries }
    }

    /// Number of distinct outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Count recorded under the exact label `outcome`.
    #[must_use]
    pub fn count_of(&self, outcome: &[Face]) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_slice() == outcome)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Face], usize)> + '_ {
        self.entries.iter().map(|(k, c)| (k.as_slice(), *c))
    }
}
