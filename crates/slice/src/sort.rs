use std::cmp::Ordering;

use crate::Ordered;

/// Returns an ascending copy of `seq`. The input is left untouched.
///
/// Equal elements end up adjacent but in no guaranteed relative order.
pub fn sort<T: Ordered + Clone>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort_unstable_by(Ordered::total_cmp);
    sorted
}

/// Returns a copy of `seq` ordered by `less`.
///
/// `less(working, i, j)` sees the whole working copy and answers whether
/// `working[i]` sorts before `working[j]`, so keys can be derived from the
/// structure of each element. The working copy is never permuted while the
/// sort runs; only an index permutation is, and the result is gathered from
/// it at the end.
pub fn sort_by<T, F>(seq: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&[T], usize, usize) -> bool,
{
    let mut order: Vec<usize> = (0..seq.len()).collect();
    order.sort_unstable_by(|&i, &j| {
        debug_assert!(i < seq.len() && j < seq.len());
        if less(seq, i, j) {
            Ordering::Less
        } else if less(seq, j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    order.into_iter().map(|i| seq[i].clone()).collect()
}

#[inline]
pub(crate) fn is_sorted<T: Ordered>(seq: &[T]) -> bool {
    seq.windows(2)
        .all(|w| w[0].total_cmp(&w[1]) != Ordering::Greater)
}
