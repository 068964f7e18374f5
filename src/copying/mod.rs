//! Sorts that leave their input untouched and return a new, sorted vector.

// Recursive top-down merge sort.
pub mod merge_sort;

// First element pivot quicksort, three buckets concatenated.
pub mod quicksort;
