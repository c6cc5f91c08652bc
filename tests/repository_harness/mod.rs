//! Shared test harness for repository implementations
//!
//! Provides helpers for building `Anime` records and the
//! `repository_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//! use repository_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;

use catalog::entities::Anime;
use chrono::{DateTime, Duration, Utc};

/// Create an `Anime` with the given id and name, created now.
pub fn anime(id: i64, name: &str) -> Anime {
    Anime::new(id, name, Utc::now())
}

/// Create an `Anime` created `days` days ago.
pub fn anime_created_days_ago(id: i64, name: &str, days: i64) -> Anime {
    Anime::new(id, name, days_ago(days))
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// `n` records with ids `1..=n` named "Anime 01", "Anime 02", ...
pub fn sample_batch(n: i64) -> Vec<Anime> {
    (1..=n).map(|id| anime(id, &format!("Anime {:02}", id))).collect()
}

/// Assert that a list contains exactly `n` records.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Ids of `records`, in order.
pub fn ids(records: &[Anime]) -> Vec<i64> {
    records.iter().map(|a| a.id).collect()
}
