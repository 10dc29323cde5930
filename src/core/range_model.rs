use serde::{Deserialize, Serialize};

use crate::core::{Bounds, TimeValue};
use crate::error::{AxisError, AxisResult};

/// Logical axis range, either derived from the latest data snapshot or set
/// explicitly.
///
/// Every change of the effective logical bounds is queued as a pending
/// transition that the owner forwards to the bounds animator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeModel {
    auto_ranging: bool,
    data_bounds: Option<Bounds>,
    explicit_bounds: Option<Bounds>,
    #[serde(skip)]
    pending_transition: Option<Bounds>,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RangeModel {
    #[must_use]
    pub fn new(auto_ranging: bool) -> Self {
        Self {
            auto_ranging,
            data_bounds: None,
            explicit_bounds: None,
            pending_transition: None,
        }
    }

    #[must_use]
    pub fn is_auto_ranging(&self) -> bool {
        self.auto_ranging
    }

    #[must_use]
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.data_bounds
    }

    #[must_use]
    pub fn explicit_bounds(&self) -> Option<Bounds> {
        self.explicit_bounds
    }

    /// Re-derives data bounds from a snapshot in any order.
    ///
    /// An empty snapshot collapses both bounds to [`TimeValue::EPOCH`]; a
    /// single instant collapses both bounds to that instant.
    pub fn set_auto_range_from_data(&mut self, snapshot: &[TimeValue]) {
        let bounds = match (snapshot.iter().min(), snapshot.iter().max()) {
            (Some(min), Some(max)) => Bounds::ordered(*min, *max),
            _ => Bounds::collapsed(TimeValue::EPOCH),
        };
        self.update(|model| model.data_bounds = Some(bounds));
    }

    /// Widens data bounds to cover one more instant.
    pub fn extend_auto_range(&mut self, value: TimeValue) {
        self.update(|model| {
            model.data_bounds = Some(match model.data_bounds {
                Some(bounds) => bounds.extended_to(value),
                None => Bounds::collapsed(value),
            });
        });
    }

    /// Replaces the explicit bounds and turns auto-ranging off.
    pub fn set_explicit_bounds(&mut self, lower: TimeValue, upper: TimeValue) -> AxisResult<()> {
        let bounds = Bounds::new(lower, upper)?;
        self.update(|model| {
            model.explicit_bounds = Some(bounds);
            model.auto_ranging = false;
        });
        Ok(())
    }

    pub fn set_auto_ranging(&mut self, enabled: bool) {
        self.update(|model| model.auto_ranging = enabled);
    }

    /// Current authoritative bounds.
    ///
    /// With auto-ranging on and no snapshot seen yet, this is the empty
    /// snapshot sentinel. With auto-ranging off, explicit bounds are required.
    pub fn logical_bounds(&self) -> AxisResult<Bounds> {
        if self.auto_ranging {
            return Ok(self
                .data_bounds
                .unwrap_or_else(|| Bounds::collapsed(TimeValue::EPOCH)));
        }
        self.explicit_bounds.ok_or(AxisError::MissingBounds)
    }

    /// Takes the most recent queued transition target, if any.
    pub fn take_pending_transition(&mut self) -> Option<Bounds> {
        self.pending_transition.take()
    }

    fn update(&mut self, change: impl FnOnce(&mut Self)) {
        let before = self.logical_bounds().ok();
        change(self);
        let after = self.logical_bounds().ok();
        if after.is_some() && after != before {
            self.pending_transition = after;
        }
    }
}
