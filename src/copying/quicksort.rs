use std::cmp::Ordering;

use crate::compare;

sort_impl!("quicksort_copying", copying);

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
/// The first element of every sub-list is its pivot. Each remaining element is compared once
/// against it and lands in one of three buckets, `lower`, `equal` or `upper`, keeping its
/// relative order. The pivot leads `equal`. The result is `sort(lower) ++ equal ++ sort(upper)`.
///
/// Average *O*(*n* \* log(*n*)), worst case *O*(*n*^2) for sorted or reverse sorted input.
/// Duplicates of the pivot are settled in one pass, so inputs with few distinct values are cheap.
///
/// The recursion runs on a heap allocated work list instead of the call stack, so skewed splits
/// cost time but can't overflow the stack.
///
/// # Examples
///
/// ```
/// use comparator_sort::{last_digit, quick_sort_copy_by};
///
/// assert_eq!(quick_sort_copy_by(&[21, 15, 33, 8], last_digit), [21, 33, 15, 8]);
/// ```
pub fn sorted_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v.to_vec(), &mut compare)
}

enum Task<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

fn quicksort<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(v.len());
    let mut pending = vec![Task::Sort(v)];

    while let Some(task) = pending.pop() {
        match task {
            Task::Emit(equal) => out.extend(equal),
            Task::Sort(v) if v.len() <= 1 => out.extend(v),
            Task::Sort(v) => {
                let (lower, equal, upper) = partition(v, compare);

                // Popped in reverse order, lower first.
                if !upper.is_empty() {
                    pending.push(Task::Sort(upper));
                }
                pending.push(Task::Emit(equal));
                if !lower.is_empty() {
                    pending.push(Task::Sort(lower));
                }
            }
        }
    }

    out
}

/// Splits `v` into the elements less than, equal to and greater than `v[0]`.
fn partition<T, F>(v: Vec<T>, compare: &mut F) -> (Vec<T>, Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lower = Vec::new();
    let mut equal = Vec::new();
    let mut upper = Vec::new();

    let mut iter = v.into_iter();
    let Some(pivot) = iter.next() else {
        return (lower, equal, upper);
    };

    for elem in iter {
        match compare(&elem, &pivot) {
            Ordering::Less => lower.push(elem),
            Ordering::Equal => equal.push(elem),
            Ordering::Greater => upper.push(elem),
        }
    }

    equal.insert(0, pivot);

    (lower, equal, upper)
}
