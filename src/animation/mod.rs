use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, TimeValue};

pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 700;

/// Tuning for displayed-bounds transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsAnimationConfig {
    /// When `false`, every change jumps straight to the new bounds.
    pub enabled: bool,
    pub duration_ms: u64,
}

impl Default for BoundsAnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: DEFAULT_TRANSITION_DURATION_MS,
        }
    }
}

impl BoundsAnimationConfig {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// One in-flight transition, sampled against the external clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    pub from: Bounds,
    pub to: Bounds,
    /// Frame clock value of the first tick after the request. `None` until
    /// that tick arrives.
    pub started_at: Option<Duration>,
    pub duration: Duration,
}

impl AnimationState {
    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(self, now: Duration) -> Bounds {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        Bounds::ordered(
            lerp(self.from.lower(), self.to.lower(), progress),
            lerp(self.from.upper(), self.to.upper(), progress),
        )
    }

    #[must_use]
    pub fn is_finished(self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Interpolates displayed bounds toward the latest logical bounds.
///
/// The animator owns no timer. The host's frame loop calls [`Self::tick`]
/// with a monotonic timestamp; a transition starts at the first tick after
/// it was requested, so an idle frame clock never eats into its duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsAnimator {
    config: BoundsAnimationConfig,
    clock: Duration,
    displayed: Option<Bounds>,
    state: Option<AnimationState>,
}

impl BoundsAnimator {
    #[must_use]
    pub fn new(config: BoundsAnimationConfig) -> Self {
        Self {
            config,
            clock: Duration::ZERO,
            displayed: None,
            state: None,
        }
    }

    #[must_use]
    pub fn config(self) -> BoundsAnimationConfig {
        self.config
    }

    pub fn set_config(&mut self, config: BoundsAnimationConfig) {
        self.config = config;
        if !config.enabled {
            self.finish();
        }
    }

    #[must_use]
    pub fn clock(self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn displayed(self) -> Option<Bounds> {
        self.displayed
    }

    #[must_use]
    pub fn state(self) -> Option<AnimationState> {
        self.state
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        self.state.is_some()
    }

    /// Starts a transition from the currently displayed bounds to `target`.
    ///
    /// An in-flight transition is cancelled; the new one starts from the
    /// bounds displayed at the last clock tick and is timed from the next one. Returns `true` when a
    /// transition was started rather than applied immediately.
    pub fn request_transition(&mut self, target: Bounds) -> bool {
        let Some(from) = self.displayed else {
            self.jump_to(target);
            return false;
        };
        if !self.config.enabled || self.config.duration_ms == 0 || from == target {
            self.jump_to(target);
            return false;
        }

        self.state = Some(AnimationState {
            from,
            to: target,
            started_at: None,
            duration: self.config.duration(),
        });
        true
    }

    /// Sets displayed bounds without interpolation, cancelling any transition.
    pub fn jump_to(&mut self, target: Bounds) {
        self.state = None;
        self.displayed = Some(target);
    }

    /// Advances the clock and recomputes displayed bounds.
    ///
    /// Timestamps earlier than the last one seen are ignored so displayed
    /// bounds never run backwards.
    pub fn tick(&mut self, now: Duration) -> Option<Bounds> {
        self.clock = self.clock.max(now);
        if let Some(mut state) = self.state {
            if state.started_at.is_none() {
                state.started_at = Some(self.clock);
            }
            self.displayed = Some(state.sample(self.clock));
            self.state = if state.is_finished(self.clock) {
                None
            } else {
                Some(state)
            };
        }
        self.displayed
    }

    /// Settles any in-flight transition at its target.
    pub fn finish(&mut self) {
        if let Some(state) = self.state.take() {
            self.displayed = Some(state.to);
        }
    }
}

fn lerp(from: TimeValue, to: TimeValue, progress: f64) -> TimeValue {
    let start = from.millis() as f64;
    let end = to.millis() as f64;
    TimeValue::from_millis((start + (end - start) * progress).round() as i64)
}
