/// Leftmost argmin of two candidate indices, in either order.
#[inline(always)]
pub(crate) fn better_index<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    let va = &values[a];
    let vb = &values[b];
    if va < vb || (va == vb && a < b) { a } else { b }
}

/// Leftmost argmin of two candidates where `a` covers the left window.
#[inline(always)]
pub(crate) fn better_index_ordered<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    debug_assert!(a <= b);
    if values[a] <= values[b] { a } else { b }
}

#[inline(always)]
pub fn floor_log2_nonzero(x: usize) -> u32 {
    debug_assert!(x > 0);
    usize::BITS - 1 - x.leading_zeros()
}

#[inline(always)]
pub fn pow2(k: u32) -> usize {
    1_usize << k
}

/// Number of positions a level of a sparse table over `n` values holds.
#[inline(always)]
pub(crate) fn level_len(n: usize, level: u32) -> usize {
    n + 1 - pow2(level)
}

/// Number of stored levels (level 0 excluded) for `n` values.
#[inline]
pub(crate) fn stored_levels(n: usize) -> u32 {
    if n < 2 { 0 } else { floor_log2_nonzero(n) }
}
