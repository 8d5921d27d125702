use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Time remaining until an offer ends, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

pub fn time_left<Tz: TimeZone>(ends_at: &DateTime<Tz>, now: DateTime<Utc>) -> TimeLeft {
    let remaining = ends_at.with_timezone(&Utc) - now;
    let total = remaining.num_seconds();
    if total <= 0 {
        return TimeLeft {
            expired: true,
            ..TimeLeft::default()
        };
    }

    TimeLeft {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
        expired: false,
    }
}
