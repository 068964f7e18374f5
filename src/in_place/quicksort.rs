use std::cmp::Ordering;

use crate::compare;
use crate::in_place::partition::partition;

sort_impl!("quicksort_in_place", in_place);

/// Sorts the slice in ascending order, in place.
///
/// See [`sort_by`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, compare::ascending);
}

/// Sorts the slice with a comparator function, in place.
///
/// Quicksort with the first element of each range as pivot, see
/// [`partition_by`](crate::in_place::partition::partition_by). Equal elements may be reordered.
///
/// Average *O*(*n* \* log(*n*)), worst case *O*(*n*^2) for sorted, reverse sorted and duplicate
/// heavy input. Only the shorter side of each partition is recursed into, the longer one is
/// handled by the loop, which keeps the stack depth at *O*(log(*n*)) even in the worst case.
///
/// # Examples
///
/// ```
/// use comparator_sort::quick_sort_inplace;
///
/// let mut v = [9, 1, 5, 3];
/// quick_sort_inplace(&mut v);
/// assert_eq!(v, [1, 3, 5, 9]);
/// ```
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut compare);
}

fn quicksort<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let pivot_pos = partition(v, compare);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, compare);
            v = right;
        } else {
            quicksort(right, compare);
            v = left;
        }
    }
}
