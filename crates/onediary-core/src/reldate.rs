//! Relative date labels for diary posts
//!
//! Converts a post's absolute timestamp into the human-facing label shown
//! under the user line: "今日", "昨日", or a ja-JP calendar date.
//!
//! Comparison is by calendar day only, never by elapsed hours: a post two
//! hours before midnight is "昨日" one hour after midnight, even though less
//! than 24 hours have passed.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Label for a post dated today.
const LABEL_TODAY: &str = "今日";
/// Label for a post dated yesterday.
const LABEL_YESTERDAY: &str = "昨日";

/// Formats post timestamps relative to a reference instant.
///
/// Pure: the output depends only on the two inputs and the fixed ja-JP output
/// locale. The locale strings and date shape are isolated here so they can be
/// swapped without touching the state machine or the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeDateFormatter;

impl RelativeDateFormatter {
    /// Create a formatter for the fixed ja-JP locale.
    pub fn new() -> Self {
        Self
    }

    /// Label `raw` (an RFC 3339 instant) relative to `now`.
    ///
    /// Malformed timestamps never fail the display: the reference instant is
    /// formatted as a calendar date and returned instead. This mirrors the
    /// product's leniency policy for bad fixture data.
    pub fn format(&self, raw: &str, now: DateTime<Utc>) -> String {
        let post_day = match DateTime::parse_from_rfc3339(raw) {
            Ok(instant) => instant.with_timezone(&Utc).date_naive(),
            Err(err) => {
                tracing::debug!("unparseable post timestamp {raw:?}: {err}");
                return calendar_date(now.date_naive());
            }
        };

        let today = now.date_naive();
        if post_day == today {
            LABEL_TODAY.to_string()
        } else if Some(post_day) == today.pred_opt() {
            LABEL_YESTERDAY.to_string()
        } else {
            calendar_date(post_day)
        }
    }

    /// Label `raw` against the current instant.
    pub fn format_now(&self, raw: &str) -> String {
        self.format(raw, Utc::now())
    }
}

/// ja-JP numeric calendar date, no zero padding: `2025/4/5`.
fn calendar_date(day: NaiveDate) -> String {
    format!("{}/{}/{}", day.year(), day.month(), day.day())
}
