//! date-axis-rs: continuous date/time chart axis.
//!
//! The crate keeps the axis math headless: calendar-aligned tick planning,
//! reversible pixel mapping, auto/explicit range handling, locale-aware tick
//! labels and an externally clocked bounds animator. Rendering is left to
//! the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DateAxis, DateAxisConfig};
pub use error::{AxisError, AxisResult};
