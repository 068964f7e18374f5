//! Comparison sorts driven by a user supplied three-way comparator.
//!
//! Every algorithm comes as a pair: a plain entry point that sorts ascending for `T: Ord`, and a
//! `_by` entry point taking any `FnMut(&T, &T) -> Ordering`. All element comparisons, including
//! the ascending default, go through the comparator. See [`compare`] for the provided ones.

// Registers a sort module with the shared test suite. Copying sorts expose `sorted` and
// `sorted_by` and get their result written back, in-place sorts expose `sort` and `sort_by`.
macro_rules! sort_impl {
    ($name:expr, copying) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = sorted(arr);
                arr.clone_from_slice(&sorted);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                let sorted = sorted_by(arr, compare);
                arr.clone_from_slice(&sorted);
            }
        }
    };
    ($name:expr, in_place) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod compare;
pub mod copying;
pub mod in_place;
pub mod merge;

pub use compare::{ascending, descending, last_digit, LastDigit};
pub use merge::{merge, merge_by};

pub use copying::merge_sort::{sorted as merge_sort, sorted_by as merge_sort_by};
pub use copying::quicksort::{sorted as quick_sort_copy, sorted_by as quick_sort_copy_by};

pub use in_place::partition::partition_by;
pub use in_place::quicksort::{sort as quick_sort_inplace, sort_by as quick_sort_inplace_by};
pub use in_place::quicksort_stack::{
    sort as quick_sort_inplace_stack, sort_by as quick_sort_inplace_stack_by,
};
