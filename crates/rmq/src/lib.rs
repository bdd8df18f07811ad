mod flat_sparse_table;
mod sparse_table;
mod util;

use std::ops::Range;

pub use flat_sparse_table::{FlatSparseTable, FlatSparseTableRmq, translate};
pub use sparse_table::{SparseTable, SparseTableRmq, build_sparse_table, query_sparse_table};
pub use util::{floor_log2_nonzero, pow2};

/// Static RMQ (Range Minimum Query) interface.
///
/// - Query ranges are half-open: `[l, r)`.
/// - The answer is `Some(argmin_index)` when the range is valid and non-empty.
/// - Ties are broken by the smallest index.
pub trait StaticRmq<T>: Sized {
    fn new(values: &[T]) -> Self;
    fn argmin(&self, range: Range<usize>) -> Option<usize>;
}
