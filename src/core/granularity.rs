use std::fmt;

use chrono::{Datelike, Days, FixedOffset, Months, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::TimeValue;
use crate::core::primitives::{from_local_naive, to_local_datetime};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Calendar unit a granularity steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl CalendarUnit {
    /// Unit length for units that are a fixed number of milliseconds in a
    /// fixed-offset zone. Years and months vary.
    #[must_use]
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Week => Some(7 * MILLIS_PER_DAY),
            Self::Day => Some(MILLIS_PER_DAY),
            Self::Hour => Some(MILLIS_PER_HOUR),
            Self::Minute => Some(MILLIS_PER_MINUTE),
            Self::Second => Some(MILLIS_PER_SECOND),
            Self::Millisecond => Some(1),
        }
    }

    /// Start of the unit containing `value`, evaluated in `offset`.
    ///
    /// Years start on January 1, months on the 1st and weeks on Monday, all
    /// at midnight. A week tick can therefore move up to six days earlier.
    /// Instants chrono cannot represent are returned unchanged.
    #[must_use]
    pub fn truncate(self, value: TimeValue, offset: FixedOffset) -> TimeValue {
        let Some(local) = to_local_datetime(value, offset) else {
            return value;
        };
        let date = local.date_naive();
        let truncated = match self {
            Self::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)
                .and_then(|day| day.and_hms_opt(0, 0, 0)),
            Self::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .and_then(|day| day.and_hms_opt(0, 0, 0)),
            Self::Week => date
                .checked_sub_days(Days::new(u64::from(
                    date.weekday().num_days_from_monday(),
                )))
                .and_then(|day| day.and_hms_opt(0, 0, 0)),
            Self::Day => date.and_hms_opt(0, 0, 0),
            Self::Hour => date.and_hms_opt(local.hour(), 0, 0),
            Self::Minute => date.and_hms_opt(local.hour(), local.minute(), 0),
            Self::Second => date.and_hms_opt(local.hour(), local.minute(), local.second()),
            Self::Millisecond => return value,
        };

        truncated
            .and_then(|naive| from_local_naive(naive, offset))
            .unwrap_or(value)
    }
}

/// Calendar step size: a unit and how many of it make one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Granularity {
    unit: CalendarUnit,
    amount: u32,
}

impl Granularity {
    pub const DECADE: Self = Self::new(CalendarUnit::Year, 10);
    pub const YEAR: Self = Self::new(CalendarUnit::Year, 1);
    pub const MONTH_6: Self = Self::new(CalendarUnit::Month, 6);
    pub const MONTH_3: Self = Self::new(CalendarUnit::Month, 3);
    pub const MONTH: Self = Self::new(CalendarUnit::Month, 1);
    pub const WEEK: Self = Self::new(CalendarUnit::Week, 1);
    pub const DAY: Self = Self::new(CalendarUnit::Day, 1);
    pub const HOUR_12: Self = Self::new(CalendarUnit::Hour, 12);
    pub const HOUR_6: Self = Self::new(CalendarUnit::Hour, 6);
    pub const HOUR_3: Self = Self::new(CalendarUnit::Hour, 3);
    pub const HOUR: Self = Self::new(CalendarUnit::Hour, 1);
    pub const MINUTE_15: Self = Self::new(CalendarUnit::Minute, 15);
    pub const MINUTE_5: Self = Self::new(CalendarUnit::Minute, 5);
    pub const MINUTE: Self = Self::new(CalendarUnit::Minute, 1);
    pub const SECOND_15: Self = Self::new(CalendarUnit::Second, 15);
    pub const SECOND_5: Self = Self::new(CalendarUnit::Second, 5);
    pub const SECOND: Self = Self::new(CalendarUnit::Second, 1);
    pub const MILLISECOND: Self = Self::new(CalendarUnit::Millisecond, 1);

    #[must_use]
    pub const fn new(unit: CalendarUnit, amount: u32) -> Self {
        Self { unit, amount }
    }

    #[must_use]
    pub fn unit(self) -> CalendarUnit {
        self.unit
    }

    #[must_use]
    pub fn amount(self) -> u32 {
        self.amount
    }

    /// Position in [`GRANULARITY_CATALOG`], `0` being the coarsest.
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        GRANULARITY_CATALOG
            .iter()
            .position(|granularity| *granularity == self)
    }

    /// Adds one step to `value`.
    ///
    /// Year and month steps are calendar additions in `offset` and clamp to
    /// the last valid day (Jan 31 + 1 month = Feb 28/29). Returns `None` on
    /// overflow.
    #[must_use]
    pub fn advance(self, value: TimeValue, offset: FixedOffset) -> Option<TimeValue> {
        match self.unit {
            CalendarUnit::Year => add_months(value, self.amount.checked_mul(12)?, offset),
            CalendarUnit::Month => add_months(value, self.amount, offset),
            unit => {
                let step = unit.fixed_millis()?.checked_mul(i64::from(self.amount))?;
                value.checked_add_millis(step)
            }
        }
    }

    /// Snaps `value` to the start of this granularity's unit.
    #[must_use]
    pub fn align(self, value: TimeValue, offset: FixedOffset) -> TimeValue {
        self.unit.truncate(value, offset)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            CalendarUnit::Year => "year",
            CalendarUnit::Month => "month",
            CalendarUnit::Week => "week",
            CalendarUnit::Day => "day",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Second => "second",
            CalendarUnit::Millisecond => "millisecond",
        };
        write!(f, "{}-{unit}", self.amount)
    }
}

/// Candidate step sizes, coarsest first. Tick planning scans this table in
/// order, so the order is part of the public contract.
pub const GRANULARITY_CATALOG: [Granularity; 18] = [
    Granularity::DECADE,
    Granularity::YEAR,
    Granularity::MONTH_6,
    Granularity::MONTH_3,
    Granularity::MONTH,
    Granularity::WEEK,
    Granularity::DAY,
    Granularity::HOUR_12,
    Granularity::HOUR_6,
    Granularity::HOUR_3,
    Granularity::HOUR,
    Granularity::MINUTE_15,
    Granularity::MINUTE_5,
    Granularity::MINUTE,
    Granularity::SECOND_15,
    Granularity::SECOND_5,
    Granularity::SECOND,
    Granularity::MILLISECOND,
];

fn add_months(value: TimeValue, months: u32, offset: FixedOffset) -> Option<TimeValue> {
    let local = to_local_datetime(value, offset)?;
    local
        .checked_add_months(Months::new(months))
        .map(|time| TimeValue::from_datetime(&time))
}
