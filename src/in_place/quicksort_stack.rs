use std::cmp::Ordering;

use crate::compare;
use crate::in_place::partition::partition_range;

sort_impl!("quicksort_in_place_stack", in_place);

/// Sorts the slice in ascending order, in place, without recursion.
///
/// See [`sort_by`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, compare::ascending);
}

/// Sorts the slice with a comparator function, in place, without recursion.
///
/// Produces exactly the same permutation as
/// [`quicksort::sort_by`](crate::in_place::quicksort::sort_by). Pending ranges live on an explicit
/// stack, which holds at most *O*(log(*n*)) entries because the longer side is always pushed
/// first and the shorter side processed first.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Inclusive ranges of length >= 2.
    let mut pending = vec![(0, len - 1)];

    while let Some((first, last)) = pending.pop() {
        let p = partition_range(v, first, last, &mut compare);

        let left = (p > first + 1).then(|| (first, p - 1));
        let right = (p + 1 < last).then(|| (p + 1, last));

        match (left, right) {
            (Some(l), Some(r)) if l.1 - l.0 < r.1 - r.0 => {
                pending.push(r);
                pending.push(l);
            }
            (Some(l), Some(r)) => {
                pending.push(l);
                pending.push(r);
            }
            (Some(range), None) | (None, Some(range)) => pending.push(range),
            (None, None) => {}
        }
    }
}
