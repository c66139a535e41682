//! Date window built from day offsets relative to today

use chrono::{DateTime, Days, NaiveTime, TimeDelta, Utc};

use crate::error::{GhsError, Result};

/// Inclusive UTC time range a statistics run looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Window from the start of day `today + start_days` to the end of day
    /// `today + end_days`. Offsets are usually negative (`-14`, `-1`).
    pub fn from_offsets(start_days: i64, end_days: i64) -> Result<Self> {
        Self::from_offsets_at(Utc::now(), start_days, end_days)
    }

    /// Same as [`DateWindow::from_offsets`] with an explicit "now"
    pub fn from_offsets_at(now: DateTime<Utc>, start_days: i64, end_days: i64) -> Result<Self> {
        if start_days > end_days {
            return Err(GhsError::InvalidWindow {
                start: start_days,
                end: end_days,
            });
        }

        let start_day = shift_days(now, start_days)?;
        let end_day = shift_days(now, end_days)?;

        let start = start_day
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let end = end_day
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .checked_add_signed(TimeDelta::days(1))
            .and_then(|next_day| next_day.checked_sub_signed(TimeDelta::milliseconds(1)))
            .ok_or_else(|| out_of_range(end_days))?;

        Ok(Self { start, end })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} – {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

fn shift_days(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>> {
    let amount = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        now.checked_sub_days(amount)
    } else {
        now.checked_add_days(amount)
    };
    shifted.ok_or_else(|| out_of_range(days))
}

fn out_of_range(days: i64) -> GhsError {
    GhsError::InvalidInput(format!("Day offset {} is out of range", days))
}
