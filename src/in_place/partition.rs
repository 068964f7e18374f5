use std::cmp::Ordering;

/// Partitions the inclusive range `v[first..=last]` around its first element and returns the
/// pivot's final index.
///
/// When the call returns all elements of the range left of the returned index compare
/// [`Less`](Ordering::Less) or [`Equal`](Ordering::Equal) to the pivot, all elements right of it
/// compare [`Greater`](Ordering::Greater) or [`Equal`](Ordering::Equal). Elements outside the
/// range are not touched.
///
/// Two marks close in from both ends of the range. `low` skips elements that are not greater
/// than the pivot, `high` skips elements that are not less than the pivot, then the pair they
/// stopped at is swapped. Once the marks cross the pivot is swapped into `high`.
///
/// Duplicates of the pivot may end up on either side. A slice full of equal elements splits
/// into `len - 1` and `0`, quadratic overall.
///
/// If `compare` does not implement a total order the resulting order and return value are
/// unspecified, but all original elements remain in `v` and the call terminates.
///
/// # Panics
///
/// Panics if `first > last` or `last >= v.len()`.
///
/// # Examples
///
/// ```
/// use comparator_sort::{ascending, partition_by};
///
/// let mut v = [5, 9, 1, 7, 3];
/// let p = partition_by(&mut v, 0, 4, ascending);
/// assert_eq!(p, 2);
/// assert_eq!(v[p], 5);
/// ```
pub fn partition_by<T, F>(v: &mut [T], first: usize, last: usize, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_range(v, first, last, &mut compare)
}

pub(crate) fn partition_range<T, F>(v: &mut [T], first: usize, last: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if first > last {
        panic!("partition range starts at {first} but ends at {last}");
    }
    if last >= len {
        panic!("partition range end {last} out of range for slice of length {len}");
    }

    first + partition(&mut v[first..=last], compare)
}

/// Partitions all of `v` around `v[0]`, `v` must not be empty.
pub(crate) fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The pivot stays at index 0 until the very end, only indices >= 1 are ever swapped.
    let mut low = 1;
    let mut high = v.len() - 1;

    loop {
        while low <= high && compare(&v[low], &v[0]) != Ordering::Greater {
            low += 1;
        }

        // low >= 1, so high can at most drop to 0 here.
        while high >= low && compare(&v[high], &v[0]) != Ordering::Less {
            high -= 1;
        }

        if high < low {
            break;
        }

        v.swap(low, high);

        // Both swapped elements are now on their side.
        low += 1;
        high -= 1;
    }

    v.swap(0, high);

    high
}
