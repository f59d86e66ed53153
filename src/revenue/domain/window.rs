//! Dashboard time windows, anchored to a fixed timezone.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;

/// The dashboard reads all window boundaries in US Eastern time.
pub const REVENUE_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Aggregation window for the revenue dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueWindow {
    /// Since local midnight.
    Today,
    /// Since the first of the local month.
    MonthToDate,
    /// Since local January 1.
    YearToDate,
}

impl RevenueWindow {
    /// Every window, in dashboard order.
    pub const ALL: [Self; 3] = [Self::Today, Self::MonthToDate, Self::YearToDate];

    /// Returns the window's start as a unix timestamp, computed from `now`
    /// in [`REVENUE_TIMEZONE`].
    #[must_use]
    pub fn start_unix(self, now: DateTime<Utc>) -> i64 {
        let local = now.with_timezone(&REVENUE_TIMEZONE);
        let (month, day) = match self {
            Self::Today => (local.month(), local.day()),
            Self::MonthToDate => (local.month(), 1),
            Self::YearToDate => (1, 1),
        };
        // Midnight is never skipped by DST in this zone, so the earliest
        // interpretation always exists.
        REVENUE_TIMEZONE
            .with_ymd_and_hms(local.year(), month, day, 0, 0, 0)
            .earliest()
            .map_or_else(|| now.timestamp(), |start| start.timestamp())
    }
}
