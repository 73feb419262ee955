use chrono::{DateTime, Duration as ChronoDuration, Utc};

/// Coarse "how long ago" text for the refresh line, e.g. `45 seconds`, `1 minute`, `3 hours`.
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let secs = td.num_seconds().max(0);
    let (count, unit) = if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[must_use]
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_time_ago(now - then)
}
