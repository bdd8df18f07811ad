//! Lowest common ancestors in `O(1)` per query.
//!
//! The tree is flattened into an Euler tour; the ancestor of `u` and `v` is
//! the shallowest tour entry between their first occurrences, found with a
//! sparse-table range-minimum query over the depth sequence.

mod euler_tour;
mod graph;
mod representatives;

use rmq::SparseTable;
use rmq::query_sparse_table;

pub use euler_tour::{EulerTour, euler_tour};
pub use graph::RootedTree;
pub use representatives::{
    DenseFirstOccurrence, FirstOccurrenceMap, record_representatives, representatives,
};

/// Everything needed to answer LCA queries on one tree: the Euler tour, its
/// depth sequence, the first tour position of every vertex and a sparse
/// table over the depths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LcaIndex {
    tour: Vec<usize>,
    depths: Vec<usize>,
    first: DenseFirstOccurrence,
    table: SparseTable,
}

impl LcaIndex {
    /// Preprocesses `tree` in `O(n log n)`.
    pub fn new(tree: &RootedTree) -> Self {
        let EulerTour { vertices, depths } = euler_tour(tree);
        let mut first = DenseFirstOccurrence::with_capacity(tree.vertex_count());
        record_representatives(vertices.iter().copied(), &mut first);
        let table = SparseTable::new(&depths);
        Self {
            tour: vertices,
            depths,
            first,
            table,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    pub fn euler_tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    pub fn representatives(&self) -> &DenseFirstOccurrence {
        &self.first
    }

    pub fn sparse_table(&self) -> &SparseTable {
        &self.table
    }

    /// Depth of `v` below the root.
    pub fn depth(&self, v: usize) -> usize {
        self.depths[first_position(&self.first, v)]
    }

    /// Lowest common ancestor of `u` and `v`, in either order.
    pub fn lca(&self, u: usize, v: usize) -> usize {
        lca_query(u, v, &self.tour, &self.depths, &self.first, &self.table)
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, DenseFirstOccurrence, SparseTable) {
        (self.tour, self.depths, self.first, self.table)
    }
}

/// Builds the [`LcaIndex`] of `tree`.
pub fn lca_preprocess(tree: &RootedTree) -> LcaIndex {
    LcaIndex::new(tree)
}

#[inline]
fn first_position<R>(representatives: &R, v: usize) -> usize
where
    R: FirstOccurrenceMap<usize> + ?Sized,
{
    representatives
        .position(&v)
        .unwrap_or_else(|| panic!("vertex {v} is not in the tree"))
}

/// Lowest common ancestor of `u` and `v` from the parts of an [`LcaIndex`].
///
/// `depths` and `table` must come from the same tour; panics when either
/// vertex has no recorded position.
pub fn lca_query<R>(
    u: usize,
    v: usize,
    tour: &[usize],
    depths: &[usize],
    representatives: &R,
    table: &SparseTable,
) -> usize
where
    R: FirstOccurrenceMap<usize> + ?Sized,
{
    let mut i = first_position(representatives, u);
    let mut j = first_position(representatives, v);
    if j < i {
        std::mem::swap(&mut i, &mut j);
    }
    tour[query_sparse_table(i, j, depths, table)]
}
