//! Windows FILETIME conversion.

use chrono::{DateTime, Utc};

/// FILETIME value of 1970-01-01T00:00:00Z
pub const UNIX_EPOCH_TICKS: u64 = 116_444_736_000_000_000;

/// FILETIME ticks (100 ns) per second
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Converts a FILETIME (100 ns intervals since 1601-01-01 UTC) to a UTC instant.
///
/// Zero means "not set" and yields `None`. Sub-second precision is dropped.
/// Values before the Unix epoch produce pre-1970 instants.
pub fn filetime_to_datetime(ticks: u64) -> Option<DateTime<Utc>> {
    if ticks == 0 {
        return None;
    }

    let delta = ticks as i128 - UNIX_EPOCH_TICKS as i128;
    let unix_seconds = delta.div_euclid(TICKS_PER_SECOND as i128) as i64;
    DateTime::from_timestamp(unix_seconds, 0)
}
