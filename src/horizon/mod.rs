//! Remaining investment horizon until the retirement date

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

/// Whole months left until retirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizonMonths {
    /// Months from today to the retirement date (negative once it has passed)
    Available(i32),
    /// Retirement date unset or not a calendar date
    Unavailable,
}

impl HorizonMonths {
    /// Month count if known
    pub fn months(&self) -> Option<i32> {
        match self {
            HorizonMonths::Available(months) => Some(*months),
            HorizonMonths::Unavailable => None,
        }
    }

    /// Month count usable for a forward projection (known and not in the past)
    pub fn projectable_months(&self) -> Option<u32> {
        self.months().and_then(|months| u32::try_from(months).ok())
    }

    /// Horizon in fractional years, with an unknown horizon counted as zero
    pub fn years(&self) -> f64 {
        f64::from(self.months().unwrap_or(0)) / 12.0
    }
}

/// Whole months from `now` until the first day of `year`/`month`.
///
/// The count is truncated toward zero, so a partial month does not count:
/// from 2026-10-18 to 2027-10-01 is 11 months. Year or month 0 means the
/// goal is unset; any pair that is not a calendar month is unavailable too.
pub fn remaining_horizon_months(year: i32, month: u32, now: NaiveDate) -> HorizonMonths {
    if year <= 0 || month == 0 {
        debug!("retirement date unset (year {}, month {})", year, month);
        return HorizonMonths::Unavailable;
    }

    let Some(target) = NaiveDate::from_ymd_opt(year, month, 1) else {
        debug!("retirement date {}-{} is not a calendar month", year, month);
        return HorizonMonths::Unavailable;
    };

    HorizonMonths::Available(months_between(now, target))
}

/// Signed whole calendar months from `from` to `to`, truncated toward zero
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;

    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unset_date_is_unavailable() {
        let now = ymd(2026, 10, 18);
        assert_eq!(remaining_horizon_months(0, 10, now), HorizonMonths::Unavailable);
        assert_eq!(remaining_horizon_months(2052, 0, now), HorizonMonths::Unavailable);
        assert_eq!(remaining_horizon_months(0, 0, now), HorizonMonths::Unavailable);
    }

    #[test]
    fn test_invalid_month_is_unavailable() {
        let now = ymd(2026, 10, 18);
        assert_eq!(remaining_horizon_months(2052, 13, now), HorizonMonths::Unavailable);
    }

    #[test]
    fn test_one_year_out_from_first_of_month() {
        let now = ymd(2026, 10, 1);
        assert_eq!(remaining_horizon_months(2027, 10, now), HorizonMonths::Available(12));
    }

    #[test]
    fn test_one_year_out_mid_month_truncates() {
        let now = ymd(2026, 10, 18);
        assert_eq!(remaining_horizon_months(2027, 10, now), HorizonMonths::Available(11));
    }

    #[test]
    fn test_year_boundary() {
        let now = ymd(2026, 12, 1);
        assert_eq!(remaining_horizon_months(2027, 1, now), HorizonMonths::Available(1));
    }

    #[test]
    fn test_past_date_is_negative() {
        let now = ymd(2026, 10, 18);
        assert_eq!(remaining_horizon_months(2025, 10, now), HorizonMonths::Available(-12));
        assert_eq!(remaining_horizon_months(2026, 9, now), HorizonMonths::Available(-1));
        // Earlier in the current month is less than a whole month ago
        assert_eq!(remaining_horizon_months(2026, 10, now), HorizonMonths::Available(0));
    }

    #[test]
    fn test_long_horizon() {
        let now = ymd(2026, 10, 1);
        assert_eq!(remaining_horizon_months(2052, 10, now), HorizonMonths::Available(312));
    }

    #[test]
    fn test_projectable_months() {
        assert_eq!(HorizonMonths::Available(24).projectable_months(), Some(24));
        assert_eq!(HorizonMonths::Available(0).projectable_months(), Some(0));
        assert_eq!(HorizonMonths::Available(-1).projectable_months(), None);
        assert_eq!(HorizonMonths::Unavailable.projectable_months(), None);
    }

    #[test]
    fn test_years() {
        assert_eq!(HorizonMonths::Available(18).years(), 1.5);
        assert_eq!(HorizonMonths::Unavailable.years(), 0.0);
    }
}
