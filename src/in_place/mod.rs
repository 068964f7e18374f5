//! Sorts that rearrange the caller's slice.
//!
//! They take `&mut [T]`, so the caller holds exclusive access for the duration of the call. No
//! new storage is allocated for the elements themselves.

// Single pivot partition over an inclusive index range.
pub mod partition;

// Recursive quicksort on top of `partition`.
pub mod quicksort;

// Same permutation as `quicksort`, driven by an explicit stack of ranges.
pub mod quicksort_stack;
