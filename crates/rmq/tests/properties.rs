use proptest::prelude::*;
use rmq::{
    FlatSparseTable, FlatSparseTableRmq, SparseTable, SparseTableRmq, StaticRmq,
    build_sparse_table, query_sparse_table,
};

fn leftmost_min(values: &[i32], i: usize, j: usize) -> usize {
    let mut best = i;
    for k in (i + 1)..=j {
        if values[k] < values[best] {
            best = k;
        }
    }
    best
}

fn values_and_range() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    prop::collection::vec(-4i32..4, 1..120).prop_flat_map(|values| {
        let n = values.len();
        (Just(values), 0..n, 0..n).prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
    })
}

proptest! {
    #[test]
    fn query_is_leftmost_minimum((values, i, j) in values_and_range()) {
        let table = build_sparse_table(&values);
        let k = query_sparse_table(i, j, &values, &table);
        prop_assert!(i <= k && k <= j);
        prop_assert!(values[i..=j].iter().all(|v| values[k] <= *v));
        prop_assert_eq!(k, leftmost_min(&values, i, j));
    }

    #[test]
    fn single_position_ranges_are_identity(values in prop::collection::vec(any::<i16>(), 1..64)) {
        let table = SparseTable::new(&values);
        for i in 0..values.len() {
            prop_assert_eq!(table.argmin(&values, i, i), i);
        }
    }

    #[test]
    fn full_range_is_global_leftmost_minimum(values in prop::collection::vec(0u8..3, 1..200)) {
        let table = SparseTable::new(&values);
        let n = values.len();
        let min = values.iter().min().copied();
        let expected = values.iter().position(|v| Some(*v) == min);
        prop_assert_eq!(Some(table.argmin(&values, 0, n - 1)), expected);
    }

    #[test]
    fn rebuilding_is_deterministic(values in prop::collection::vec(any::<i64>(), 0..150)) {
        prop_assert_eq!(SparseTable::new(&values), SparseTable::new(&values));
        prop_assert_eq!(FlatSparseTable::new(&values), FlatSparseTable::new(&values));
    }

    #[test]
    fn layouts_agree((values, i, j) in values_and_range()) {
        let ragged = SparseTableRmq::new(&values);
        let flat = FlatSparseTableRmq::new(&values);
        prop_assert_eq!(ragged.argmin(i..j + 1), flat.argmin(i..j + 1));
        prop_assert_eq!(ragged.min(i..j + 1), flat.min(i..j + 1));
    }
}
