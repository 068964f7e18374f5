//! Linear merge of two sorted sequences.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::compare;

/// Merges the ascending slices `left` and `right` into a new vector.
///
/// See [`merge_by`].
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_by(left, right, compare::ascending)
}

/// Merges `left` and `right`, each already sorted by `compare`, into a new vector sorted by
/// `compare`.
///
/// An element of `left` is only emitted before the current head of `right` if it compares
/// strictly [`Less`](Ordering::Less). On [`Equal`](Ordering::Equal) the element from `right`
/// goes first. Once one side runs out the rest of the other is appended in order.
///
/// Neither input is modified, every element is cloned once. *O*(`left.len() + right.len()`)
/// time and space.
///
/// # Examples
///
/// ```
/// use comparator_sort::merge;
///
/// assert_eq!(merge(&[1, 4, 9], &[2, 3, 10]), [1, 2, 3, 4, 9, 10]);
/// ```
pub fn merge_by<T, F>(left: &[T], right: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_iters(
        left.iter().cloned(),
        right.iter().cloned(),
        left.len() + right.len(),
        &mut compare,
    )
}

/// Shared merge loop, moves the elements out of `left` and `right`.
pub(crate) fn merge_iters<T, L, R, F>(left: L, right: R, len: usize, compare: &mut F) -> Vec<T>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(len);

    let mut left: Peekable<L> = left.peekable();
    let mut right: Peekable<R> = right.peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Less,
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}
