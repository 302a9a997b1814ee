//! Timestamp sources for task-status responses

use chrono::{DateTime, SecondsFormat, Utc};

/// Supplies the ISO-8601 timestamp stamped on task-status responses
#[cfg_attr(test, mockall::automock)]
pub trait TimestampProvider: Send + Sync {
    /// Current time as an ISO-8601 string
    fn timestamp(&self) -> String;
}

/// Wall-clock UTC time, RFC 3339 with second precision (`2025-09-17T14:40:00Z`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn timestamp(&self) -> String {
        format_timestamp(Utc::now())
    }
}

/// Always returns the same timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(String);

impl FixedClock {
    /// Create a clock frozen at the given ISO-8601 string
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }

    /// Create a clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(format_timestamp(instant))
    }
}

impl TimestampProvider for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

impl<F> TimestampProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn timestamp(&self) -> String {
        self()
    }
}

fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
