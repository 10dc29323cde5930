use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::{Bounds, GRANULARITY_CATALOG, Granularity, TimeValue};
use crate::error::{AxisError, AxisResult};

/// Preferred average gap between two tick marks.
pub const DEFAULT_TARGET_TICK_SPACING_PX: f64 = 100.0;

/// Ticks produced for one layout pass together with the granularity that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub ticks: Vec<TimeValue>,
    pub granularity: Granularity,
    pub target_tick_count: f64,
}

/// Chooses a calendar granularity for a range and emits aligned, pruned ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlanner {
    target_spacing_px: f64,
    offset: FixedOffset,
}

impl TickPlanner {
    pub fn new(target_spacing_px: f64, offset: FixedOffset) -> AxisResult<Self> {
        if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "target tick spacing must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            target_spacing_px,
            offset,
        })
    }

    #[must_use]
    pub fn target_spacing_px(self) -> f64 {
        self.target_spacing_px
    }

    #[must_use]
    pub fn target_tick_count(self, axis_length_px: f64) -> f64 {
        if !axis_length_px.is_finite() || axis_length_px <= 0.0 {
            return 0.0;
        }
        axis_length_px / self.target_spacing_px
    }

    /// Plans ticks for `bounds` on an axis `axis_length_px` long.
    ///
    /// Scans the catalog coarsest first and stops at the first granularity
    /// producing more ticks than the target; the previous (coarser) candidate
    /// replaces it when its count is strictly closer to the target. The upper
    /// bound always closes the list, interior ticks snap to unit starts and
    /// ticks crowding either bound are dropped.
    #[must_use]
    pub fn plan(self, bounds: Bounds, axis_length_px: f64) -> TickPlan {
        let target = self.target_tick_count(axis_length_px);
        let (granularity, mut ticks) = self.select_candidate(bounds, target);

        if ticks.last().is_none_or(|last| *last < bounds.upper()) {
            ticks.push(bounds.upper());
        }

        let ticks = align_interior_ticks(ticks, granularity, self.offset);
        let ticks = prune_crowded_ticks(ticks, bounds);

        TickPlan {
            ticks,
            granularity,
            target_tick_count: target,
        }
    }

    fn select_candidate(self, bounds: Bounds, target: f64) -> (Granularity, Vec<TimeValue>) {
        let mut coarser: Option<(Granularity, Vec<TimeValue>)> = None;

        for granularity in GRANULARITY_CATALOG {
            let ticks = candidate_ticks(bounds, granularity, self.offset);
            if (ticks.len() as f64) <= target {
                coarser = Some((granularity, ticks));
                continue;
            }

            return match coarser {
                Some((coarser_granularity, coarser_ticks))
                    if distance_to_target(&coarser_ticks, target)
                        < distance_to_target(&ticks, target) =>
                {
                    (coarser_granularity, coarser_ticks)
                }
                _ => (granularity, ticks),
            };
        }

        // Even the finest step stayed under the target.
        coarser.unwrap_or_else(|| (Granularity::MILLISECOND, vec![bounds.lower()]))
    }
}

/// Steps from `bounds.lower()` by `granularity` and collects every value not
/// past `bounds.upper()`, the lower bound included.
#[must_use]
pub fn candidate_ticks(
    bounds: Bounds,
    granularity: Granularity,
    offset: FixedOffset,
) -> Vec<TimeValue> {
    let mut ticks = Vec::new();
    let mut current = bounds.lower();
    while current <= bounds.upper() {
        ticks.push(current);
        match granularity.advance(current, offset) {
            Some(next) if next > current => current = next,
            _ => break,
        }
    }
    ticks
}

fn distance_to_target(ticks: &[TimeValue], target: f64) -> f64 {
    (ticks.len() as f64 - target).abs()
}

/// Snaps every tick except the first and last to the start of the
/// granularity's unit. Lists of two or fewer ticks are returned untouched.
#[must_use]
pub fn align_interior_ticks(
    mut ticks: Vec<TimeValue>,
    granularity: Granularity,
    offset: FixedOffset,
) -> Vec<TimeValue> {
    if ticks.len() <= 2 {
        return ticks;
    }
    let last_index = ticks.len() - 1;
    for tick in &mut ticks[1..last_index] {
        *tick = granularity.align(*tick, offset);
    }
    ticks
}

/// Drops the second tick when it sits closer to the lower bound than half the
/// gap to the third, and symmetrically for the second-to-last tick and the
/// upper bound. Both checks read the list as it was before any removal.
#[must_use]
pub fn prune_crowded_ticks(ticks: Vec<TimeValue>, bounds: Bounds) -> Vec<TimeValue> {
    let len = ticks.len();
    if len <= 2 {
        return ticks;
    }

    let second = ticks[1];
    let third = ticks[2];
    let drop_second = second.millis_since(bounds.lower()) < third.millis_since(second) / 2;

    let last_inner = ticks[len - 2];
    let previous_inner = ticks[len - 3];
    let drop_last_inner =
        bounds.upper().millis_since(last_inner) < last_inner.millis_since(previous_inner) / 2;

    ticks
        .into_iter()
        .enumerate()
        .filter(|(index, _)| {
            !((drop_second && *index == 1) || (drop_last_inner && *index == len - 2))
        })
        .map(|(_, tick)| tick)
        .collect()
}
