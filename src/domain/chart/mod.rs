//! Display projection for the line chart: axes, ticks, tooltip text and
//! pixel layout. Pure functions of the readings and the display unit.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::{ChartProjector, DEFAULT_TEMPERATURE_AXIS_C, humidity_axis, project, tooltip};
pub use value_objects::*;
