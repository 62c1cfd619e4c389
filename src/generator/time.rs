//! Time utilities for FlexID generation
//!
//! Provides wall-clock time in milliseconds since a custom epoch

use chrono::Utc;

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Get current time in milliseconds since custom epoch
#[inline(always)]
pub fn time_since_epoch(epoch: i64) -> i64 {
    unix_time_ms().wrapping_sub(epoch)
}
