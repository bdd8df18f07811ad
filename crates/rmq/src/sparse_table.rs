use std::ops::Range;

use crate::StaticRmq;
use crate::util::better_index;
use crate::util::better_index_ordered;
use crate::util::floor_log2_nonzero;
use crate::util::level_len;
use crate::util::pow2;
use crate::util::stored_levels;

/// Sparse table of argmin indices over a slice owned by the caller.
///
/// `levels[k - 1][i]` is the leftmost argmin of `values[i..i + 2^k]`. Level 0
/// is the identity and is never stored, so tables over fewer than two values
/// hold no rows at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseTable {
    n: usize,
    levels: Vec<Vec<usize>>,
}

impl SparseTable {
    /// Builds the table in `O(n log n)` time and space.
    pub fn new<T: Ord>(values: &[T]) -> Self {
        let n = values.len();
        let level_count = stored_levels(n);
        let mut levels: Vec<Vec<usize>> = Vec::with_capacity(level_count as usize);
        if level_count == 0 {
            return Self { n, levels };
        }

        let mut first = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            first.push(better_index_ordered(values, i, i + 1));
        }
        levels.push(first);

        for k in 2..=level_count {
            let half = pow2(k - 1);
            let prev = &levels[k as usize - 2];
            let mut row = Vec::with_capacity(level_len(n, k));
            for i in 0..level_len(n, k) {
                row.push(better_index_ordered(values, prev[i], prev[i + half]));
            }
            levels.push(row);
        }

        Self { n, levels }
    }

    /// Number of values the table was built over.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of levels including the implicit level 0.
    pub fn level_count(&self) -> usize {
        if self.n == 0 { 0 } else { self.levels.len() + 1 }
    }

    /// Stored row for `level >= 1`.
    pub fn level(&self, level: usize) -> &[usize] {
        assert!(level >= 1, "level 0 is implicit");
        &self.levels[level - 1]
    }

    /// `M[level][i]`, answering level 0 without touching storage.
    pub fn get(&self, level: usize, i: usize) -> usize {
        if level == 0 {
            assert!(i < self.n, "position {i} out of bounds for {} values", self.n);
            return i;
        }
        self.level(level)[i]
    }

    /// Leftmost argmin of `values[i..=j]` in `O(1)`.
    ///
    /// Panics unless `i <= j < n` and `values` has the length the table was
    /// built over.
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
        debug_assert!(i < j && j < self.n);
        let k = floor_log2_nonzero(j - i + 1);
        let row = &self.levels[k as usize - 1];
        let a = row[i];
        let b = row[j + 1 - pow2(k)];
        better_index(values, a, b)
    }
}

/// Builds a [`SparseTable`] over `values`.
pub fn build_sparse_table<T: Ord>(values: &[T]) -> SparseTable {
    SparseTable::new(values)
}

/// Leftmost argmin of `values[i..=j]`; see [`SparseTable::argmin`].
pub fn query_sparse_table<T: Ord>(i: usize, j: usize, values: &[T], table: &SparseTable) -> usize {
    table.argmin(values, i, j)
}

/// A [`SparseTable`] bundled with its own copy of the values.
#[derive(Clone, Debug)]
pub struct SparseTableRmq<T> {
    values: Vec<T>,
    table: SparseTable,
}

impl<T: Ord + Clone> SparseTableRmq<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn table(&self) -> &SparseTable {
        &self.table
    }

    /// Discards the current contents and preprocesses `values` instead.
    pub fn rebuild(&mut self, values: &[T]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.table = SparseTable::new(&self.values);
    }

    pub fn min(&self, range: Range<usize>) -> Option<&T> {
        self.argmin(range).map(|idx| &self.values[idx])
    }
}

impl<T: Ord + Clone> StaticRmq<T> for SparseTableRmq<T> {
    fn new(values: &[T]) -> Self {
        let values = values.to_vec();
        let table = SparseTable::new(&values);
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
