//! Calendar month selection
//!
//! The summary screen works on one month at a time and steps backwards and
//! forwards with the previous/next keys.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month of a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    /// 1-based month
    month: u32,
}

impl MonthPeriod {
    /// Create a period, returning None for an invalid month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::of_date(chrono::Local::now().date_naive())
    }

    /// The month containing a date
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The previous month, rolling back over January
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month, rolling over December
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether the timestamp falls in this month (UTC calendar)
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Header label, e.g. `May, 2021`
    pub fn label(&self) -> String {
        format!("{}, {}", self.month_name(), self.year)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error for unparseable month strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}'. Use YYYY-MM (e.g., 2021-05)", self.0)
    }
}

impl std::error::Error for PeriodParseError {}

impl FromStr for MonthPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PeriodParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        if year.len() != 4 {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_navigation_wraps_years() {
        let jan = MonthPeriod::new(2021, 1).unwrap();
        assert_eq!(jan.prev(), MonthPeriod::new(2020, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);

        let dec = MonthPeriod::new(2021, 12).unwrap();
        assert_eq!(dec.next(), MonthPeriod::new(2022, 1).unwrap());
    }

    #[test]
    fn test_contains_checks_year_too() {
        let may = MonthPeriod::new(2021, 5).unwrap();
        let in_may = Utc.with_ymd_and_hms(2021, 5, 31, 23, 59, 59).unwrap();
        let june = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        let may_last_year = Utc.with_ymd_and_hms(2020, 5, 10, 12, 0, 0).unwrap();

        assert!(may.contains(&in_may));
        assert!(!may.contains(&june));
        assert!(!may.contains(&may_last_year));
    }

    #[test]
    fn test_parse_and_display() {
        let period: MonthPeriod = "2021-05".parse().unwrap();
        assert_eq!(period.year(), 2021);
        assert_eq!(period.month(), 5);
        assert_eq!(period.to_string(), "2021-05");
        assert_eq!(period.label(), "May, 2021");

        assert!("2021-13".parse::<MonthPeriod>().is_err());
        assert!("May 2021".parse::<MonthPeriod>().is_err());
        assert!("21-05".parse::<MonthPeriod>().is_err());
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthPeriod::new(2021, 0).is_none());
        assert!(MonthPeriod::new(2021, 13).is_none());
    }
}
