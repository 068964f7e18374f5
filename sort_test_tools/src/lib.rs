use std::cmp::Ordering;

// Re-exported so the test instantiation macros work without the user crate depending on paste.
pub use paste;

/// Common interface for every sort that wants to run through the shared test suite.
///
/// Sorts that produce a new sequence are adapted by writing their result back into `arr`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
