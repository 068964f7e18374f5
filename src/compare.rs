//! The three-way comparator contract and the comparators shipped with the crate.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`. It must define a total order for the
//! elements being sorted. An order is a total order if it is (for all `a`, `b` and `c`):
//!
//! * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
//! * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
//!
//! None of the sorts verify this. If the ordering is not total the resulting order is
//! unspecified, but the output is still a permutation of the input.

use std::cmp::Ordering;

/// Orders `a` before `b` if `a < b`.
#[inline]
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Mirror of [`ascending`], orders `a` before `b` if `a > b`.
#[inline]
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Greater
    } else if b < a {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Compares integers by their last decimal digit only, ascending.
///
/// `21` and `31` compare equal. For negative values the digit is the floored remainder in
/// `0..=9`, so `-3` sorts like `7` and `-10` like `0`. See [`LastDigit`].
#[inline]
pub fn last_digit<T: LastDigit>(a: &T, b: &T) -> Ordering {
    ascending(&a.last_digit(), &b.last_digit())
}

/// Maps the outcome onto the `-1 / 0 / 1` convention.
#[inline]
pub fn as_sign(ord: Ordering) -> i8 {
    ord as i8
}

/// Integer types that can be reduced to their last decimal digit.
pub trait LastDigit {
    /// Returns `self` modulo 10, always in `0..=9`.
    fn last_digit(&self) -> u8;
}

macro_rules! impl_last_digit_signed {
    ($($t:ty),*) => {
        $(
            impl LastDigit for $t {
                #[inline]
                fn last_digit(&self) -> u8 {
                    // rem_euclid floors, `%` would yield -9..=-1 for negative values.
                    self.rem_euclid(10) as u8
                }
            }
        )*
    };
}

macro_rules! impl_last_digit_unsigned {
    ($($t:ty),*) => {
        $(
            impl LastDigit for $t {
                #[inline]
                fn last_digit(&self) -> u8 {
                    (*self % 10) as u8
                }
            }
        )*
    };
}

impl_last_digit_signed!(i8, i16, i32, i64, i128, isize);
impl_last_digit_unsigned!(u8, u16, u32, u64, u128, usize);
