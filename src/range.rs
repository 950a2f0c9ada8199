//! Symmetric tolerance check around a center value.

use std::ops::{Add, Sub};

use crate::metrics;

/// `true` iff `b - margin <= a <= b + margin`.
///
/// Bounds are computed with plain `-`/`+`, so integer overflow behaves like
/// the type's own arithmetic.
pub fn is_in_range<T>(a: T, b: T, margin: T) -> bool
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    metrics::record_range_check();
    b - margin <= a && a <= b + margin
}
