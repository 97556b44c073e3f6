use crate::Ordered;

#[inline]
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

#[inline]
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Position of the first element equal to `value`, by linear scan.
///
/// Equality is `PartialEq`, not [`Ordered`]: for floats `-0.0 == 0.0` and NaN
/// is never found. [`sorted_index`] agrees with this whenever `PartialEq` and
/// the total order agree on the values involved.
pub fn index<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|x| x == value)
}

/// Position of the first element equal to `value` in an ascending slice.
///
/// Binary search, `O(log n)`. The slice is assumed sorted; this is not
/// checked. Equality is [`Ordered::total_cmp`], so a NaN finds a NaN and
/// `-0.0` does not find `0.0`.
pub fn sorted_index<T: Ordered>(seq: &[T], value: &T) -> Option<usize> {
    let idx = seq.partition_point(|x| x.total_lt(value));
    seq.get(idx).filter(|x| x.total_eq(value)).map(|_| idx)
}

#[inline]
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    index(seq, value).is_some()
}

#[inline]
pub fn sorted_contains<T: Ordered>(seq: &[T], value: &T) -> bool {
    sorted_index(seq, value).is_some()
}

/// Splits off the last element. The remainder is a new vector.
pub fn pop<T: Clone>(seq: &[T]) -> Option<(T, Vec<T>)> {
    let (last, rest) = seq.split_last()?;
    Some((last.clone(), rest.to_vec()))
}

/// Splits off the first element. The remainder is a new vector.
pub fn shift<T: Clone>(seq: &[T]) -> Option<(T, Vec<T>)> {
    let (first, rest) = seq.split_first()?;
    Some((first.clone(), rest.to_vec()))
}

/// Returns a new vector with `value` in front of `seq`.
pub fn unshift<T: Clone>(seq: &[T], value: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.push(value);
    result.extend_from_slice(seq);
    result
}
