use std::time::Duration;

use tracing::trace;

use crate::animation::{AnimationState, BoundsAnimationConfig};
use crate::core::Bounds;
use crate::error::AxisResult;

use super::DateAxis;
use super::validation::validate_animation_config;

impl DateAxis {
    /// Advances the displayed-bounds transition to `now`.
    ///
    /// `now` comes from the host's monotonic frame clock. Returns `true`
    /// while a transition is still in flight. A host may stop ticking once
    /// this returns `false`; the next transition is timed from the first
    /// tick after it was requested.
    pub fn tick_animation(&mut self, now: Duration) -> bool {
        let displayed = self.animator.tick(now);
        let animating = self.animator.is_animating();
        if let Some(bounds) = displayed {
            trace!(
                lower = %bounds.lower(),
                upper = %bounds.upper(),
                animating,
                "animation tick"
            );
        }
        animating
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    #[must_use]
    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animator.state()
    }

    /// Settles the displayed range at the current transition target.
    pub fn finish_animation(&mut self) {
        self.animator.finish();
    }

    #[must_use]
    pub fn animation_config(&self) -> BoundsAnimationConfig {
        self.animator.config()
    }

    pub fn set_animation_config(&mut self, config: BoundsAnimationConfig) -> AxisResult<()> {
        let config = validate_animation_config(config)?;
        self.config.animation = config;
        self.animator.set_config(config);
        Ok(())
    }

    /// Bounds currently used for pixel mapping.
    ///
    /// Before any bounds were displayed this is the logical range. Fails with
    /// `MissingBounds` whenever the logical range is missing, even if an
    /// earlier range is still on screen.
    pub fn displayed_bounds(&self) -> AxisResult<Bounds> {
        let logical = self.logical_bounds()?;
        Ok(self.animator.displayed().unwrap_or(logical))
    }
}
