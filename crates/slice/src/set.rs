use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::Ordered;
use crate::sort::{is_sorted, sort};

/// Returns the distinct elements of `seq` in ascending order.
pub fn unique<T: Ordered + Clone>(seq: &[T]) -> Vec<T> {
    sorted_unique(&sort(seq))
}

/// Collapses runs of equal elements, keeping the first of each run.
///
/// `seq` must already be ascending. Unsorted input does not panic, but only
/// adjacent duplicates are removed.
pub fn sorted_unique<T: Ordered + Clone>(seq: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(seq.len());
    for x in seq {
        match result.last() {
            Some(last) if last.total_eq(x) => {}
            _ => result.push(x.clone()),
        }
    }
    result
}

/// One step of a merge walk over two deduplicated sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Merged<T> {
    /// Only in the left set.
    Left(T),
    /// In both sets.
    Both(T),
    /// Only in the right set.
    Right(T),
}

impl<T> Merged<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Left(x) | Self::Both(x) | Self::Right(x) => x,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Left(x) | Self::Both(x) | Self::Right(x) => x,
        }
    }
}

/// Ascending two-pointer walk over `unique(left)` and `unique(right)`.
///
/// Every distinct value of the union is yielded exactly once.
#[derive(Clone, Debug)]
pub struct MergeWalk<T> {
    left: std::vec::IntoIter<T>,
    right: std::vec::IntoIter<T>,
    pending_left: Option<T>,
    pending_right: Option<T>,
}

impl<T: Ordered + Clone> MergeWalk<T> {
    fn new(left: &[T], right: &[T]) -> Self {
        let left = unique(left);
        let right = unique(right);
        debug_assert!(is_sorted(&left) && is_sorted(&right));

        let mut left = left.into_iter();
        let mut right = right.into_iter();
        Self {
            pending_left: left.next(),
            pending_right: right.next(),
            left,
            right,
        }
    }
}

impl<T: Ordered> Iterator for MergeWalk<T> {
    type Item = Merged<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (&self.pending_left, &self.pending_right) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => l.total_cmp(r),
        };

        match order {
            Ordering::Less => {
                let x = self.pending_left.take()?;
                self.pending_left = self.left.next();
                Some(Merged::Left(x))
            }
            Ordering::Greater => {
                let x = self.pending_right.take()?;
                self.pending_right = self.right.next();
                Some(Merged::Right(x))
            }
            Ordering::Equal => {
                let x = self.pending_left.take()?;
                self.pending_left = self.left.next();
                self.pending_right = self.right.next();
                Some(Merged::Both(x))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.left.len() + usize::from(self.pending_left.is_some());
        let r = self.right.len() + usize::from(self.pending_right.is_some());
        (l.max(r), Some(l + r))
    }
}

impl<T: Ordered> FusedIterator for MergeWalk<T> {}

/// Returns the merge walk of `left` against `right`.
pub fn merge_walk<T: Ordered + Clone>(left: &[T], right: &[T]) -> MergeWalk<T> {
    MergeWalk::new(left, right)
}

/// Callback that ignores its argument; pass it to [`compare`] for a case
/// that needs no handling.
#[inline]
pub fn noop<T>(_: &T) {}

/// Visits the distinct values of `left` and `right` in ascending order.
///
/// `on_left` fires for values only in `left`, `on_right` for values only in
/// `right`, and `on_equal` once for values in both.
pub fn compare<T, L, E, R>(
    left: &[T],
    right: &[T],
    mut on_left: L,
    mut on_equal: E,
    mut on_right: R,
) where
    T: Ordered + Clone,
    L: FnMut(&T),
    E: FnMut(&T),
    R: FnMut(&T),
{
    for step in merge_walk(left, right) {
        match &step {
            Merged::Left(x) => on_left(x),
            Merged::Both(x) => on_equal(x),
            Merged::Right(x) => on_right(x),
        }
    }
}

/// Set difference `left \ right`, ascending and deduplicated.
pub fn subtract<T: Ordered + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::new();
    compare(left, right, |x: &T| result.push(x.clone()), noop, noop);
    result
}

/// Set intersection, ascending and deduplicated.
pub fn intersect<T: Ordered + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_walk(left, right)
        .filter_map(|step| match step {
            Merged::Both(x) => Some(x),
            _ => None,
        })
        .collect()
}

/// Set union, ascending and deduplicated.
pub fn union<T: Ordered + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_walk(left, right).map(Merged::into_value).collect()
}
