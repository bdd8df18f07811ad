use std::ops::Range;

use crate::StaticRmq;
use crate::util::better_index;
use crate::util::better_index_ordered;
use crate::util::floor_log2_nonzero;
use crate::util::level_len;
use crate::util::pow2;
use crate::util::stored_levels;

/// Offset of logical position `(i, level)` in a flat table over `n` values.
///
/// Levels are appended one after another starting at level 1, so level `k`
/// begins after `sum_{l<k} (n + 1 - 2^l)` entries.
#[inline(always)]
pub fn translate(i: usize, level: u32, n: usize) -> usize {
    debug_assert!(level >= 1);
    if level == 1 {
        i
    } else {
        let level_usize = level as usize;
        (level_usize - 1) * n - (pow2(level) - level_usize - 1) + i
    }
}

trait Slot: Copy {
    fn from_index(idx: usize) -> Self;
    fn index(self) -> usize;
}

impl Slot for u32 {
    #[inline(always)]
    fn from_index(idx: usize) -> Self {
        idx as u32
    }

    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }
}

impl Slot for usize {
    #[inline(always)]
    fn from_index(idx: usize) -> Self {
        idx
    }

    #[inline(always)]
    fn index(self) -> usize {
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum FlatIndices {
    U32(Vec<u32>),
    Usize(Vec<usize>),
}

fn build<T: Ord, S: Slot>(values: &[T]) -> Vec<S> {
    let n = values.len();
    let levels = stored_levels(n);
    let total_len: usize = (1..=levels).map(|k| level_len(n, k)).sum();
    let mut table = Vec::with_capacity(total_len);
    if levels == 0 {
        return table;
    }

    for i in 0..n - 1 {
        table.push(S::from_index(better_index_ordered(values, i, i + 1)));
    }

    for k in 2..=levels {
        let half = pow2(k - 1);
        // Offsets, not a borrowed row: the buffer grows while the previous level is read.
        let prev_base = translate(0, k - 1, n);
        for i in 0..level_len(n, k) {
            let a = table[prev_base + i].index();
            let b = table[prev_base + i + half].index();
            table.push(S::from_index(better_index_ordered(values, a, b)));
        }
    }

    debug_assert_eq!(table.len(), total_len);
    table
}

/// Sparse table with every stored level in one contiguous buffer.
///
/// Holds `u32` indices whenever they fit, halving the footprint of
/// [`SparseTable`](crate::SparseTable) on 64-bit targets. Answers are
/// identical to the ragged layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlatSparseTable {
    n: usize,
    table: FlatIndices,
}

impl FlatSparseTable {
    pub fn new<T: Ord>(values: &[T]) -> Self {
        let n = values.len();
        let table = if n <= (u32::MAX as usize) {
            FlatIndices::U32(build(values))
        } else {
            FlatIndices::Usize(build(values))
        };
        Self { n, table }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of stored entries across all levels.
    pub fn stored_len(&self) -> usize {
        match &self.table {
            FlatIndices::U32(table) => table.len(),
            FlatIndices::Usize(table) => table.len(),
        }
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        match &self.table {
            FlatIndices::U32(table) => table[offset] as usize,
            FlatIndices::Usize(table) => table[offset],
        }
    }

    /// `M[level][i]`; level 0 is the identity.
    pub fn get(&self, level: usize, i: usize) -> usize {
        assert!(i < self.n, "position {i} out of bounds for {} values", self.n);
        if level == 0 {
            return i;
        }
        let level = level as u32;
        assert!(level <= stored_levels(self.n), "level {level} not stored");
        assert!(i < level_len(self.n, level), "position {i} past the end of level {level}");
        self.slot(translate(i, level, self.n))
    }

    /// Leftmost argmin of `values[i..=j]`; same contract as
    /// [`SparseTable::argmin`](crate::SparseTable::argmin).
    pub fn argmin<T: Ord>(&self, values: &[T], i: usize, j: usize) -> usize {
        assert_eq!(
            values.len(),
            self.n,
            "sparse table built over {} values, queried with {}",
            self.n,
            values.len()
        );
        assert!(i <= j, "inverted query range [{i}, {j}]");
        assert!(j < self.n, "query range [{i}, {j}] out of bounds for {} values", self.n);
        if i == j {
            return i;
        }
        self.argmin_assume_valid(values, i, j)
    }

    #[inline(always)]
    fn argmin_assume_valid<T: Ord>(&self, values: &[T], i: usize, j: usize) -> usize {
        let k = floor_log2_nonzero(j - i + 1);
        let a = self.slot(translate(i, k, self.n));
        let b = self.slot(translate(j + 1 - pow2(k), k, self.n));
        better_index(values, a, b)
    }
}

#[derive(Clone, Debug)]
pub struct FlatSparseTableRmq<T> {
    values: Vec<T>,
    table: FlatSparseTable,
}

impl<T: Ord + Clone> FlatSparseTableRmq<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn table(&self) -> &FlatSparseTable {
        &self.table
    }

    pub fn rebuild(&mut self, values: &[T]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.table = FlatSparseTable::new(&self.values);
    }

    pub fn min(&self, range: Range<usize>) -> Option<&T> {
        self.argmin(range).map(|idx| &self.values[idx])
    }
}

impl<T: Ord + Clone> StaticRmq<T> for FlatSparseTableRmq<T> {
    fn new(values: &[T]) -> Self {
        let values = values.to_vec();
        let table = FlatSparseTable::new(&values);
        Self { values, table }
    }

    fn argmin(&self, range: Range<usize>) -> Option<usize> {
        if range.start >= range.end || range.end > self.values.len() {
            return None;
        }
        let (i, j) = (range.start, range.end - 1);
        if i == j {
            return Some(i);
        }
        Some(self.table.argmin_assume_valid(&self.values, i, j))
    }
}
