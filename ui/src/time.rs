//! Relative timestamp formatting
//!
//! Pure conversion from (timestamp, reference instant) to a humanized label,
//! so rendering code stays deterministic under test with an injected "now".

use chrono::{DateTime, Utc};

/// Format `then` relative to `now` (e.g. "2 minutes ago")
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(then);

    // Clock skew can put a fresh record slightly in the future
    let seconds = duration.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = duration.num_minutes();
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = duration.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = duration.num_days();
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Format `then` relative to the current instant
pub fn relative_from_now(then: DateTime<Utc>) -> String {
    relative_time(then, Utc::now())
}
