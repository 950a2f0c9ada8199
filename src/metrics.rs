//! Lightweight global metrics for utilkit.
//!
//! Потокобезопасные атомарные счётчики:
//! - fatal / expect
//! - release
//! - random draws
//! - range checks

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

// ----- fatal / expect -----
static FATAL_EXITS: AtomicU64 = AtomicU64::new(0);
static EXPECT_FAILURES: AtomicU64 = AtomicU64::new(0);

// ----- release -----
static RELEASES_TOTAL: AtomicU64 = AtomicU64::new(0);
static RELEASE_NOOPS: AtomicU64 = AtomicU64::new(0);

// ----- random -----
static RANDOM_INT_DRAWS: AtomicU64 = AtomicU64::new(0);
static RANDOM_REAL_DRAWS: AtomicU64 = AtomicU64::new(0);

// ----- range -----
static RANGE_CHECKS: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub fatal_exits: u64,
    pub expect_failures: u64,

    pub releases_total: u64,
    pub release_noops: u64,

    pub random_int_draws: u64,
    pub random_real_draws: u64,

    pub range_checks: u64,
}

pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        fatal_exits: FATAL_EXITS.load(Ordering::Relaxed),
        expect_failures: EXPECT_FAILURES.load(Ordering::Relaxed),
        releases_total: RELEASES_TOTAL.load(Ordering::Relaxed),
        release_noops: RELEASE_NOOPS.load(Ordering::Relaxed),
        random_int_draws: RANDOM_INT_DRAWS.load(Ordering::Relaxed),
        random_real_draws: RANDOM_REAL_DRAWS.load(Ordering::Relaxed),
        range_checks: RANGE_CHECKS.load(Ordering::Relaxed),
    }
}

pub fn record_fatal_exit() {
    FATAL_EXITS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_expect_failure() {
    EXPECT_FAILURES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_release() {
    RELEASES_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub fn record_release_noop() {
    RELEASE_NOOPS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_random_int_draw() {
    RANDOM_INT_DRAWS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_random_real_draw() {
    RANDOM_REAL_DRAWS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_range_check() {
    RANGE_CHECKS.fetch_add(1, Ordering::Relaxed);
}
