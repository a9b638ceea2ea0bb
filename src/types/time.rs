use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Date(pub i64);

impl Date {
    #[inline]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// `None` when the instant is not representable on this platform.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let magnitude = Duration::from_millis(self.0.unsigned_abs());
        if self.0 >= 0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        }
    }
}

impl From<Date> for i64 {
    #[inline]
    fn from(value: Date) -> Self {
        value.0
    }
}

/// Internal replication timestamp: seconds plus an ordinal within the second.
///
/// Stored as one little-endian u64 with the increment in the low half.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Timestamp {
    pub timestamp: u32,
    pub increment: u32,
}
