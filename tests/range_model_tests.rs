use date_axis::core::{Bounds, RangeModel, TimeValue};
use date_axis::error::AxisError;

fn t(millis: i64) -> TimeValue {
    TimeValue::from_millis(millis)
}

#[test]
fn empty_snapshot_collapses_to_epoch() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[]);

    let bounds = model.logical_bounds().expect("auto bounds");
    assert_eq!(bounds, Bounds::collapsed(TimeValue::EPOCH));
}

#[test]
fn single_instant_collapses_both_bounds() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(42_000)]);

    let bounds = model.logical_bounds().expect("auto bounds");
    assert_eq!(bounds.lower(), t(42_000));
    assert_eq!(bounds.upper(), t(42_000));
    assert!(bounds.is_degenerate());
}

#[test]
fn unordered_snapshot_uses_min_and_max() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(500), t(-20), t(9_000), t(17)]);

    let bounds = model.logical_bounds().expect("auto bounds");
    assert_eq!(bounds.lower(), t(-20));
    assert_eq!(bounds.upper(), t(9_000));
}

#[test]
fn explicit_bounds_disable_auto_ranging() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(0), t(100)]);
    model
        .set_explicit_bounds(t(1_000), t(2_000))
        .expect("valid explicit bounds");

    assert!(!model.is_auto_ranging());
    let bounds = model.logical_bounds().expect("explicit bounds");
    assert_eq!((bounds.lower(), bounds.upper()), (t(1_000), t(2_000)));

    // Data keeps being tracked while explicit bounds are active.
    model.set_auto_range_from_data(&[t(5), t(7)]);
    assert_eq!(model.logical_bounds().expect("explicit bounds"), bounds);
    assert_eq!(model.data_bounds(), Some(Bounds::new(t(5), t(7)).expect("bounds")));
}

#[test]
fn inverted_explicit_bounds_are_rejected_without_side_effects() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(0), t(100)]);
    let _ = model.take_pending_transition();

    let err = model
        .set_explicit_bounds(t(2_000), t(1_000))
        .expect_err("inverted bounds");
    assert_eq!(
        err,
        AxisError::InvalidRange {
            lower: t(2_000),
            upper: t(1_000),
        }
    );
    assert!(model.is_auto_ranging());
    assert_eq!(model.explicit_bounds(), None);
    assert_eq!(model.take_pending_transition(), None);
}

#[test]
fn manual_mode_without_explicit_bounds_is_missing_bounds() {
    let model = RangeModel::new(false);
    assert_eq!(model.logical_bounds(), Err(AxisError::MissingBounds));
}

#[test]
fn logical_changes_queue_a_single_pending_transition() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(0), t(100)]);

    let queued = model.take_pending_transition().expect("queued transition");
    assert_eq!(queued, Bounds::new(t(0), t(100)).expect("bounds"));
    assert_eq!(model.take_pending_transition(), None);

    // Same snapshot again leaves logical bounds untouched.
    model.set_auto_range_from_data(&[t(100), t(0)]);
    assert_eq!(model.take_pending_transition(), None);
}

#[test]
fn extend_widens_data_bounds_and_queues_when_auto() {
    let mut model = RangeModel::default();
    model.extend_auto_range(t(10));
    model.extend_auto_range(t(-5));
    model.extend_auto_range(t(3));

    assert_eq!(
        model.logical_bounds().expect("auto bounds"),
        Bounds::new(t(-5), t(10)).expect("bounds")
    );
    assert_eq!(
        model.take_pending_transition(),
        Some(Bounds::new(t(-5), t(10)).expect("bounds"))
    );
}

#[test]
fn extend_in_manual_mode_does_not_queue() {
    let mut model = RangeModel::default();
    model
        .set_explicit_bounds(t(0), t(1_000))
        .expect("valid explicit bounds");
    let _ = model.take_pending_transition();

    model.extend_auto_range(t(5_000));
    assert_eq!(model.take_pending_transition(), None);
}

#[test]
fn re_enabling_auto_ranging_returns_to_data_bounds() {
    let mut model = RangeModel::default();
    model.set_auto_range_from_data(&[t(0), t(100)]);
    model
        .set_explicit_bounds(t(1_000), t(2_000))
        .expect("valid explicit bounds");
    let _ = model.take_pending_transition();

    model.set_auto_ranging(true);
    let data = Bounds::new(t(0), t(100)).expect("bounds");
    assert_eq!(model.logical_bounds().expect("auto bounds"), data);
    assert_eq!(model.take_pending_transition(), Some(data));
}
