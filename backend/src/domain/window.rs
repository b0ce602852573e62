//! Inclusive timestamp window used by every read path.

use chrono::{DateTime, Duration, Utc};

/// Number of days covered by the implicit trailing window.
pub const DEFAULT_TRAILING_DAYS: i64 = 30;

/// Inclusive timestamp range `[since, until]`.
///
/// Both bounds belong to the window: a record stamped exactly at `since`
/// or `until` matches. An empty window (`since > until`) is legal and
/// simply matches nothing.
///
/// # Examples
/// ```
/// use backend::domain::ReportingWindow;
/// use chrono::{Duration, Utc};
///
/// let until = Utc::now();
/// let window = ReportingWindow::new(until - Duration::days(7), until);
/// assert!(window.contains(until));
/// assert!(!window.contains(until + Duration::seconds(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    since: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl ReportingWindow {
    /// Build a window from explicit bounds.
    pub fn new(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self { since, until }
    }

    /// The implicit trailing window `[now - 30d, now]` used by list
    /// endpoints when the caller supplies no bounds.
    pub fn default_trailing() -> Self {
        Self::trailing_days(DEFAULT_TRAILING_DAYS)
    }

    /// A trailing window of `days` days ending now.
    pub fn trailing_days(days: i64) -> Self {
        let until = Utc::now();
        Self {
            since: until - Duration::days(days),
            until,
        }
    }

    /// Inclusive lower bound.
    pub fn since(&self) -> DateTime<Utc> {
        self.since
    }

    /// Inclusive upper bound.
    pub fn until(&self) -> DateTime<Utc> {
        self.until
    }

    /// Whether the instant falls inside the window, bounds included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.since && instant <= self.until
    }
}
