//! Domain layer: readings, the sliding window, unit conversion and the
//! display projection. Nothing here touches the browser directly.

pub mod chart;
pub mod environment;
pub mod errors;
pub mod logging;
