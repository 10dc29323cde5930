use std::sync::Arc;

use chrono::{TimeZone, Utc};
use date_axis::api::{
    AxisLabelLocale, DateAxis, DateAxisConfig, TickLabelPattern, TimeAxisLabelConfig,
    TimeAxisTimeZone, format_time_axis_tick_label, resolve_tick_label_pattern,
};
use date_axis::core::{Granularity, TimeValue};
use date_axis::error::AxisError;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> TimeValue {
    TimeValue::from(
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .expect("valid utc date"),
    )
}

fn en_us() -> TimeAxisLabelConfig {
    TimeAxisLabelConfig::default()
}

fn es_es() -> TimeAxisLabelConfig {
    TimeAxisLabelConfig {
        locale: AxisLabelLocale::EsEs,
        timezone: TimeAxisTimeZone::Utc,
    }
}

#[test]
fn year_start_shows_bare_year() {
    let label = format_time_axis_tick_label(at(2015, 1, 1, 0, 0, 0), Granularity::YEAR, en_us());
    assert_eq!(label, "2015");
    let decade = format_time_axis_tick_label(at(2020, 1, 1, 0, 0, 0), Granularity::DECADE, es_es());
    assert_eq!(decade, "2020");
}

#[test]
fn year_tick_off_january_first_falls_back_to_date() {
    let label =
        format_time_axis_tick_label(at(2013, 12, 25, 0, 0, 0), Granularity::YEAR, en_us());
    assert_eq!(label, "Dec 25, 2013");
}

#[test]
fn month_start_shows_month_and_short_year() {
    let label = format_time_axis_tick_label(at(2024, 4, 1, 0, 0, 0), Granularity::MONTH_3, en_us());
    assert_eq!(label, "Apr 24");
}

#[test]
fn month_tick_off_first_day_falls_back_to_date() {
    let label = format_time_axis_tick_label(at(2024, 3, 10, 0, 0, 0), Granularity::MONTH, en_us());
    assert_eq!(label, "Mar 10, 2024");
    let spanish = format_time_axis_tick_label(at(2024, 3, 10, 0, 0, 0), Granularity::MONTH, es_es());
    assert_eq!(spanish, "10/03/2024");
}

#[test]
fn day_and_week_ticks_use_medium_date() {
    let day = format_time_axis_tick_label(at(2024, 3, 5, 0, 0, 0), Granularity::DAY, en_us());
    assert_eq!(day, "Mar 5, 2024");
    let week = format_time_axis_tick_label(at(2024, 3, 4, 0, 0, 0), Granularity::WEEK, es_es());
    assert_eq!(week, "04/03/2024");
}

#[test]
fn hour_and_minute_ticks_show_short_time() {
    let value = at(2024, 3, 5, 14, 30, 0);
    assert_eq!(format_time_axis_tick_label(value, Granularity::HOUR, en_us()), "2:30 PM");
    assert_eq!(format_time_axis_tick_label(value, Granularity::MINUTE_15, es_es()), "14:30");
}

#[test]
fn second_ticks_show_seconds() {
    let value = at(2024, 3, 5, 9, 5, 7);
    assert_eq!(format_time_axis_tick_label(value, Granularity::SECOND_5, en_us()), "9:05:07 AM");
    assert_eq!(format_time_axis_tick_label(value, Granularity::SECOND, es_es()), "09:05:07");
}

#[test]
fn millisecond_ticks_show_fractional_seconds() {
    let value = TimeValue::from_millis(at(2024, 3, 5, 9, 5, 7).millis() + 250);
    assert_eq!(
        format_time_axis_tick_label(value, Granularity::MILLISECOND, en_us()),
        "9:05:07.250 AM"
    );
    assert_eq!(
        format_time_axis_tick_label(value, Granularity::MILLISECOND, es_es()),
        "09:05:07.250"
    );
}

#[test]
fn pattern_resolution_depends_on_calendar_position() {
    let offset = chrono::FixedOffset::east_opt(0).expect("utc");
    let jan_first = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date")
        .with_timezone(&offset);
    let jan_first_noon = Utc
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid date")
        .with_timezone(&offset);

    assert_eq!(
        resolve_tick_label_pattern(Granularity::YEAR, jan_first),
        TickLabelPattern::Year
    );
    assert_eq!(
        resolve_tick_label_pattern(Granularity::YEAR, jan_first_noon),
        TickLabelPattern::Date
    );
    assert_eq!(
        resolve_tick_label_pattern(Granularity::MONTH_6, jan_first_noon),
        TickLabelPattern::MonthYear
    );
}

#[test]
fn same_instant_labels_differ_by_granularity_through_the_axis() {
    let axis = DateAxis::new(DateAxisConfig::new(800.0)).expect("axis init");
    let value = at(2024, 1, 1, 0, 0, 0);

    assert_eq!(axis.tick_label(value, Granularity::YEAR), "2024");
    assert_eq!(axis.tick_label(value, Granularity::DAY), "Jan 1, 2024");
    assert_eq!(axis.tick_label(value, Granularity::HOUR), "12:00 AM");
    assert_eq!(axis.tick_label(value, Granularity::YEAR), "2024");

    let stats = axis.time_label_cache_stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.size, 3);
}

#[test]
fn custom_formatter_takes_precedence_until_cleared() {
    let mut axis = DateAxis::new(DateAxisConfig::new(800.0)).expect("axis init");
    let value = at(2024, 1, 1, 0, 0, 0);
    assert_eq!(axis.tick_label(value, Granularity::YEAR), "2024");

    axis.set_time_label_formatter(Arc::new(|value: TimeValue| format!("t={}", value.millis())));
    assert!(axis.has_time_label_formatter());
    assert_eq!(
        axis.tick_label(value, Granularity::YEAR),
        format!("t={}", value.millis())
    );

    axis.clear_time_label_formatter();
    assert!(!axis.has_time_label_formatter());
    assert_eq!(axis.tick_label(value, Granularity::YEAR), "2024");
}

#[test]
fn changing_time_zone_invalidates_cached_labels() {
    let mut axis = DateAxis::new(DateAxisConfig::new(800.0)).expect("axis init");
    let value = at(2024, 3, 5, 14, 30, 0);
    assert_eq!(axis.tick_label(value, Granularity::HOUR), "2:30 PM");

    axis.set_time_label_config(TimeAxisLabelConfig {
        locale: AxisLabelLocale::EnUs,
        timezone: TimeAxisTimeZone::FixedOffsetMinutes { minutes: -300 },
    })
    .expect("valid label config");

    assert_eq!(axis.time_label_cache_stats().size, 0);
    assert_eq!(axis.tick_label(value, Granularity::HOUR), "9:30 AM");
}

#[test]
fn out_of_range_offset_is_rejected() {
    let mut axis = DateAxis::new(DateAxisConfig::new(800.0)).expect("axis init");
    let err = axis
        .set_time_label_config(TimeAxisLabelConfig {
            locale: AxisLabelLocale::EnUs,
            timezone: TimeAxisTimeZone::FixedOffsetMinutes { minutes: 900 },
        })
        .expect_err("offset beyond 14 hours");
    assert!(matches!(err, AxisError::InvalidData(_)));
    assert_eq!(axis.time_label_config(), TimeAxisLabelConfig::default());
}
