/// Applies `f` to every element, left to right.
pub fn map<T, R, F>(seq: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    seq.iter().map(f).collect()
}

/// Like [`map`], but `f` also receives the element's index.
pub fn map_with_index<T, R, F>(seq: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(usize, &T) -> R,
{
    seq.iter().enumerate().map(|(i, x)| f(i, x)).collect()
}

/// Left fold. `f` gets the running accumulator, the index and the element.
pub fn reduce<T, A, F>(seq: &[T], initial: A, mut f: F) -> A
where
    F: FnMut(A, usize, &T) -> A,
{
    seq.iter()
        .enumerate()
        .fold(initial, |acc, (i, x)| f(acc, i, x))
}

/// Elements for which `pred` holds, in their original order.
pub fn select<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| pred(x)).cloned().collect()
}

/// Like [`select`], but `pred` also receives the element's index.
pub fn select_with_index<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|&(i, x)| pred(i, x))
        .map(|(_, x)| x.clone())
        .collect()
}

/// First element for which `pred` holds.
pub fn find<T, F>(seq: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    seq.iter().find(|x| pred(x))
}

/// Like [`find`], but `pred` also receives the element's index.
pub fn find_with_index<T, F>(seq: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .find(|&(i, x)| pred(i, x))
        .map(|(_, x)| x)
}
