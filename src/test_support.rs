//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::nav::NavigationItem;
use crate::core::timestamp::Timestamp;

/// Reference "now" for deterministic tests: 2023-11-14T22:13:20Z.
pub const NOW: i64 = 1_700_000_000;

/// Timestamp from Unix seconds.
pub fn ts(secs: i64) -> Timestamp {
    Timestamp::from_unix(secs).unwrap()
}

/// Timestamp `elapsed` seconds before [`NOW`]. Negative values land in the future.
pub fn ago(elapsed: i64) -> Timestamp {
    ts(NOW - elapsed)
}

pub fn item(path: &str, label: &str) -> NavigationItem {
    NavigationItem::new(path, label).unwrap()
}
