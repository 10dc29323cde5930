pub mod granularity;
pub mod primitives;
pub mod range_model;
pub mod scale;
pub mod ticks;
pub mod types;

pub use granularity::{CalendarUnit, GRANULARITY_CATALOG, Granularity};
pub use range_model::RangeModel;
pub use scale::CoordinateMapper;
pub use ticks::{
    DEFAULT_TARGET_TICK_SPACING_PX, TickPlan, TickPlanner, align_interior_ticks,
    candidate_ticks, prune_crowded_ticks,
};
pub use types::{Bounds, DataPoint, Orientation, TimeValue};
