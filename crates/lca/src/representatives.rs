use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

const NONE: usize = usize::MAX;

/// Key to position map where the first recorded position of a key sticks.
pub trait FirstOccurrenceMap<K> {
    /// Records `index` for `key` unless `key` already has a position.
    fn record(&mut self, key: K, index: usize);
    fn position(&self, key: &K) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Hash + Eq, S: BuildHasher> FirstOccurrenceMap<K> for HashMap<K, usize, S> {
    fn record(&mut self, key: K, index: usize) {
        self.entry(key).or_insert(index);
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.get(key).copied()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Ord> FirstOccurrenceMap<K> for BTreeMap<K, usize> {
    fn record(&mut self, key: K, index: usize) {
        self.entry(key).or_insert(index);
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.get(key).copied()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// First positions of vertex ids `0..n`, stored densely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseFirstOccurrence {
    positions: Vec<usize>,
    len: usize,
}

impl DenseFirstOccurrence {
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            positions: vec![NONE; vertex_count],
            len: 0,
        }
    }

    /// `(vertex, first position)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter(|&(_, &pos)| pos != NONE)
            .map(|(v, &pos)| (v, pos))
    }
}

impl FirstOccurrenceMap<usize> for DenseFirstOccurrence {
    fn record(&mut self, key: usize, index: usize) {
        if key >= self.positions.len() {
            self.positions.resize(key + 1, NONE);
        }
        let slot = &mut self.positions[key];
        if *slot == NONE {
            *slot = index;
            self.len += 1;
        }
    }

    #[inline]
    fn position(&self, key: &usize) -> Option<usize> {
        match self.positions.get(*key) {
            Some(&pos) if pos != NONE => Some(pos),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Feeds `(key, index)` for every element of `tour` into `map`.
pub fn record_representatives<K, M>(tour: impl IntoIterator<Item = K>, map: &mut M)
where
    M: FirstOccurrenceMap<K> + ?Sized,
{
    for (index, key) in tour.into_iter().enumerate() {
        map.record(key, index);
    }
}

/// Maps every distinct element of `tour` to the position it first occurs at.
pub fn representatives<K, M>(tour: impl IntoIterator<Item = K>) -> M
where
    M: FirstOccurrenceMap<K> + Default,
{
    let mut map = M::default();
    record_representatives(tour, &mut map);
    map
}
