use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::primitives::to_local_datetime;
use crate::core::{CalendarUnit, Granularity, TimeValue};

use super::{AxisLabelLocale, TimeAxisLabelConfig};

const ES_MONTH_ABBREVIATIONS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Label layout picked for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickLabelPattern {
    Year,
    MonthYear,
    Date,
    TimeMinute,
    TimeSecond,
    TimeMillisecond,
}

/// Picks the label layout for a tick produced at `granularity`.
///
/// Year ticks on January 1 at midnight show the bare year, month ticks on
/// the 1st show month and two-digit year, everything else falls back to the
/// unit's default.
#[must_use]
pub fn resolve_tick_label_pattern(
    granularity: Granularity,
    local: DateTime<FixedOffset>,
) -> TickLabelPattern {
    let at_midnight = local.hour() == 0 && local.minute() == 0 && local.second() == 0;
    match granularity.unit() {
        CalendarUnit::Year if local.month() == 1 && local.day() == 1 && at_midnight => {
            TickLabelPattern::Year
        }
        CalendarUnit::Month if local.day() == 1 => TickLabelPattern::MonthYear,
        CalendarUnit::Day | CalendarUnit::Week => TickLabelPattern::Date,
        CalendarUnit::Hour | CalendarUnit::Minute => TickLabelPattern::TimeMinute,
        CalendarUnit::Second => TickLabelPattern::TimeSecond,
        CalendarUnit::Millisecond => TickLabelPattern::TimeMillisecond,
        CalendarUnit::Year | CalendarUnit::Month => TickLabelPattern::Date,
    }
}

/// Built-in tick label text for `value` at `granularity`.
#[must_use]
pub fn format_time_axis_tick_label(
    value: TimeValue,
    granularity: Granularity,
    config: TimeAxisLabelConfig,
) -> String {
    let Some(local) = to_local_datetime(value, config.timezone.fixed_offset()) else {
        return value.millis().to_string();
    };

    let pattern = resolve_tick_label_pattern(granularity, local);
    match (config.locale, pattern) {
        (_, TickLabelPattern::Year) => local.format("%Y").to_string(),
        (AxisLabelLocale::EnUs, TickLabelPattern::MonthYear) => local.format("%b %y").to_string(),
        (AxisLabelLocale::EsEs, TickLabelPattern::MonthYear) => {
            let month = ES_MONTH_ABBREVIATIONS[local.month0() as usize];
            format!("{month} {}", local.format("%y"))
        }
        (AxisLabelLocale::EnUs, TickLabelPattern::Date) => local.format("%b %-d, %Y").to_string(),
        (AxisLabelLocale::EnUs, TickLabelPattern::TimeMinute) => {
            local.format("%-I:%M %p").to_string()
        }
        (AxisLabelLocale::EnUs, TickLabelPattern::TimeSecond) => {
            local.format("%-I:%M:%S %p").to_string()
        }
        (AxisLabelLocale::EnUs, TickLabelPattern::TimeMillisecond) => {
            local.format("%-I:%M:%S%.3f %p").to_string()
        }
        (AxisLabelLocale::EsEs, TickLabelPattern::Date) => local.format("%d/%m/%Y").to_string(),
        (AxisLabelLocale::EsEs, TickLabelPattern::TimeMinute) => local.format("%H:%M").to_string(),
        (AxisLabelLocale::EsEs, TickLabelPattern::TimeSecond) => {
            local.format("%H:%M:%S").to_string()
        }
        (AxisLabelLocale::EsEs, TickLabelPattern::TimeMillisecond) => {
            local.format("%H:%M:%S%.3f").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::format_time_axis_tick_label;
    use crate::api::{AxisLabelLocale, TimeAxisLabelConfig, TimeAxisTimeZone};
    use crate::core::{Granularity, TimeValue};

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> TimeValue {
        TimeValue::from(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
                .single()
                .expect("valid utc date"),
        )
    }

    #[test]
    fn spanish_month_labels_use_spanish_abbreviations() {
        let config = TimeAxisLabelConfig {
            locale: AxisLabelLocale::EsEs,
            timezone: TimeAxisTimeZone::Utc,
        };
        let label = format_time_axis_tick_label(at(2024, 8, 1, 0, 0, 0), Granularity::MONTH, config);
        assert_eq!(label, "ago 24");
    }

    #[test]
    fn labels_follow_configured_offset() {
        let config = TimeAxisLabelConfig {
            locale: AxisLabelLocale::EnUs,
            timezone: TimeAxisTimeZone::FixedOffsetMinutes { minutes: 60 },
        };
        // 23:00 UTC on Dec 31 is midnight of Jan 1 in UTC+1.
        let label = format_time_axis_tick_label(at(2023, 12, 31, 23, 0, 0), Granularity::YEAR, config);
        assert_eq!(label, "2024");
    }
}
