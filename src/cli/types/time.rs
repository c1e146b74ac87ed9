//! Time-related types for the recent-games lookup.

use crate::error::{BasketbotError, Result};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

/// balldontlie reports game dates on US Eastern time (EST, no DST shift).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -5;

/// How far back "recent" reaches.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 1;

/// Longest accepted lookback, one (leap) year.
pub const MAX_LOOKBACK_DAYS: u32 = 366;

/// Calendar window used to query recently played games.
///
/// The upstream API filters games by calendar date in its own timezone, so the
/// current instant is converted into that timezone before taking dates.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use nba_basketbot::RecentGamesWindow;
///
/// let window = RecentGamesWindow::default();
/// // 03:00 UTC is still the previous evening in New York.
/// let now = Utc.with_ymd_and_hms(2023, 3, 10, 3, 0, 0).unwrap();
/// let (start, end) = window.dates(now);
/// assert_eq!(start.to_string(), "2023-03-08");
/// assert_eq!(end.to_string(), "2023-03-09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentGamesWindow {
    offset: FixedOffset,
    lookback: Duration,
}

impl RecentGamesWindow {
    pub fn new(offset: FixedOffset, lookback: Duration) -> Self {
        Self { offset, lookback }
    }

    /// Build a window from whole-hour offset and a day count, as taken from the CLI.
    pub fn from_hours(utc_offset_hours: i32, lookback_days: u32) -> Result<Self> {
        if !(-23..=23).contains(&utc_offset_hours) {
            return Err(BasketbotError::InvalidUtcOffset {
                hours: utc_offset_hours,
            });
        }
        let offset = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or(
            BasketbotError::InvalidUtcOffset {
                hours: utc_offset_hours,
            },
        )?;
        if lookback_days > MAX_LOOKBACK_DAYS {
            return Err(BasketbotError::InvalidLookback {
                days: lookback_days,
                max: MAX_LOOKBACK_DAYS,
            });
        }
        Ok(Self::new(offset, Duration::days(i64::from(lookback_days))))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn lookback(&self) -> Duration {
        self.lookback
    }

    /// `(start_date, end_date)` for a query made at `now`.
    ///
    /// A lookback reaching past the calendar's range starts at [`NaiveDate::MIN`].
    pub fn dates(&self, now: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
        let local = now.with_timezone(&self.offset);
        let start = local
            .checked_sub_signed(self.lookback)
            .map_or(NaiveDate::MIN, |start| start.date_naive());
        (start, local.date_naive())
    }

    /// Same as [`dates`](Self::dates), formatted the way the API expects (`YYYY-MM-DD`).
    pub fn query_dates(&self, now: DateTime<Utc>) -> (String, String) {
        let (start, end) = self.dates(now);
        (
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        )
    }
}

impl Default for RecentGamesWindow {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600)
            .expect("default offset is within a day");
        Self::new(offset, Duration::days(i64::from(DEFAULT_LOOKBACK_DAYS)))
    }
}
