pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::{CanvasChartRenderer, HUMIDITY_COLOR, TEMPERATURE_COLOR};
