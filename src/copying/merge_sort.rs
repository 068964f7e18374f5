use std::cmp::Ordering;

use crate::compare;
use crate::merge::merge_iters;

sort_impl!("merge_sort_copying", copying);

/// Returns a sorted copy of `v` in ascending order.
///
/// See [`sorted_by`].
#[inline]
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted_by(v, compare::ascending)
}

/// Returns a copy of `v` sorted with a comparator function, `v` itself is not modified.
///
/// Top-down merge sort: split at `len / 2`, sort both halves, merge them with the tie-break of
/// [`merge_by`](crate::merge::merge_by), where an element from the right half is emitted before
/// an equal one from the left half.
///
/// *O*(*n* \* log(*n*)) time, at most *n* \* ⌈log2(*n*)⌉ comparisons. Every element is cloned
/// exactly once, afterwards elements are moved between the per level buffers.
///
/// # Examples
///
/// ```
/// use comparator_sort::{descending, merge_sort_by};
///
/// assert_eq!(merge_sort_by(&[5, 3, 8, 1], descending), [8, 5, 3, 1]);
/// ```
pub fn sorted_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v.to_vec(), &mut compare)
}

fn merge_sort<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return v;
    }

    let mid = len / 2;
    let right = v.split_off(mid);

    let left = merge_sort(v, compare);
    let right = merge_sort(right, compare);

    merge_iters(left.into_iter(), right.into_iter(), len, compare)
}
