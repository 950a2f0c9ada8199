//! Uniform random draws over closed intervals.
//!
//! Every call seeds its own `StdRng` from OS entropy: no shared generator,
//! no seeding API, no reproducibility between calls or runs.

use std::fmt::Display;

use anyhow::{anyhow, Result};
use log::debug;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::metrics;

mod sealed {
    pub trait Sealed {}
}

/// Integer types accepted by [`random_int`].
pub trait Integer: sealed::Sealed + SampleUniform + PartialOrd + Copy + Display {}

/// Floating-point types accepted by [`random_real`].
pub trait Real: sealed::Sealed + SampleUniform + PartialOrd + Copy + Display {
    fn is_finite(self) -> bool;

    /// `max - min` is too wide for rand's uniform sampler (its scale must stay finite).
    fn is_wide_span(min: Self, max: Self) -> bool;

    fn quarter(self) -> Self;

    fn quadruple(self) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Integer for $t {}
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_real {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Real for $t {
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn is_wide_span(min: Self, max: Self) -> bool {
                let w = max - min;
                !w.is_finite() || w > <$t>::MAX / 2.0
            }

            fn quarter(self) -> Self {
                self / 4.0
            }

            fn quadruple(self) -> Self {
                self * 4.0
            }
        }
    )*};
}

impl_real!(f32, f64);

fn fresh_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Uniform integer in `[min, max]`; errors if `min > max`.
pub fn try_random_int<T: Integer>(min: T, max: T) -> Result<T> {
    if min > max {
        return Err(anyhow!("random_int: empty range [{}, {}]", min, max));
    }
    let v = fresh_rng().gen_range(min..=max);
    metrics::record_random_int_draw();
    debug!("random_int [{}, {}] -> {}", min, max, v);
    Ok(v)
}

/// Uniform integer in `[min, max]`.
///
/// # Panics
/// If `min > max`.
pub fn random_int<T: Integer>(min: T, max: T) -> T {
    match try_random_int(min, max) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

/// Uniform real in `[min, max]`; errors if `min > max` or a bound is not finite.
pub fn try_random_real<T: Real>(min: T, max: T) -> Result<T> {
    if !min.is_finite() || !max.is_finite() {
        return Err(anyhow!("random_real: non-finite bound [{}, {}]", min, max));
    }
    if min > max {
        return Err(anyhow!("random_real: empty range [{}, {}]", min, max));
    }
    let mut rng = fresh_rng();
    let v = if T::is_wide_span(min, max) {
        // Draw at a quarter of the scale, then scale back; the clamp absorbs
        // rounding of subnormal bounds.
        let r = rng.gen_range(min.quarter()..=max.quarter()).quadruple();
        if r < min {
            min
        } else if r > max {
            max
        } else {
            r
        }
    } else {
        rng.gen_range(min..=max)
    };
    metrics::record_random_real_draw();
    debug!("random_real [{}, {}] -> {}", min, max, v);
    Ok(v)
}

/// Uniform real in `[min, max]`.
///
/// # Panics
/// If `min > max` or a bound is NaN/infinite.
pub fn random_real<T: Real>(min: T, max: T) -> T {
    match try_random_real(min, max) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SAMPLES: usize = 10_000;

    #[test]
    fn ints_stay_in_closed_range_and_vary() {
        for &(lo, hi) in &[(0i64, 1i64), (-5, 5), (100, 1_000), (i64::MIN, i64::MAX)] {
            let mut seen = HashSet::new();
            for _ in 0..SAMPLES {
                let v = random_int(lo, hi);
                assert!(v >= lo && v <= hi, "{v} outside [{lo}, {hi}]");
                seen.insert(v);
            }
            assert!(seen.len() > 1, "range [{lo}, {hi}] produced a single value");
        }
    }

    #[test]
    fn degenerate_int_range_returns_the_bound() {
        for _ in 0..100 {
            assert_eq!(random_int(7u8, 7u8), 7);
        }
    }

    #[test]
    fn small_int_range_hits_both_ends() {
        let mut seen = HashSet::new();
        for _ in 0..SAMPLES {
            seen.insert(random_int(1u32, 3u32));
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn reals_stay_in_closed_range() {
        for &(lo, hi) in &[(0.0f64, 1.0f64), (-2.5, 2.5), (1e-9, 2e-9), (3.0, 3.0)] {
            for _ in 0..SAMPLES {
                let v = random_real(lo, hi);
                assert!(v >= lo && v <= hi, "{v} outside [{lo}, {hi}]");
            }
        }
        for _ in 0..SAMPLES {
            let v = random_real(-1.0f32, 1.0f32);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn extreme_real_bounds_do_not_overflow() {
        let cases_f64 = [
            (f64::MIN, f64::MAX),
            (-f64::MAX, 0.0),
            (0.0, f64::MAX),
            (-f64::MAX * 0.5, f64::MAX * 0.5),
            (5e-324, f64::MAX),
        ];
        for &(lo, hi) in &cases_f64 {
            for _ in 0..1_000 {
                let v = try_random_real(lo, hi).expect("finite bounds must not fail");
                assert!(v >= lo && v <= hi, "{v} outside [{lo}, {hi}]");
            }
        }
        for _ in 0..1_000 {
            let v = try_random_real(f32::MIN, f32::MAX).expect("finite f32 bounds must not fail");
            assert!(v.is_finite());
        }
    }

    #[test]
    fn full_f64_span_hits_both_signs() {
        let mut neg = false;
        let mut pos = false;
        for _ in 0..1_000 {
            let v = random_real(f64::MIN, f64::MAX);
            neg |= v < 0.0;
            pos |= v > 0.0;
        }
        assert!(neg && pos, "full span stayed on one side of zero");
    }

    #[test]
    fn subnormal_width_ranges() {
        let tiny = f64::from_bits(1); // 5e-324
        for &(lo, hi) in &[(0.0, tiny), (tiny, tiny * 2.0), (-tiny, tiny)] {
            for _ in 0..1_000 {
                let v = random_real(lo, hi);
                assert!(v >= lo && v <= hi, "{v} outside [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn inverted_or_nan_bounds_are_errors() {
        assert!(try_random_int(5, 4).is_err());
        assert!(try_random_real(1.0, 0.0).is_err());
        assert!(try_random_real(f64::NAN, 1.0).is_err());
        assert!(try_random_real(0.0, f64::INFINITY).is_err());
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn random_int_panics_on_inverted_bounds() {
        random_int(10i32, -10i32);
    }
}
